mod document;
mod exclusion;
mod registry;
