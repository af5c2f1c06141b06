mod object_image_store;

pub use object_image_store::ObjectImageStore;
