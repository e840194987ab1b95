mod object_file_store;

pub use object_file_store::ObjectFileStore;
