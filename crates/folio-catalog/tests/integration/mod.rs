mod directory;
mod store_lifecycle;
