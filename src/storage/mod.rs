mod client;
mod naming;

pub use client::{ObjectStore, S3ObjectStore};
pub use naming::{generate_object_name, object_name_at};

pub const IMAGE_CONTENT_TYPE: &str = "image/png";

/// `s3://` reference for an object, as returned to callers.
pub fn s3_url(bucket: &str, key: &str) -> String {
    format!("s3://{}/{}", bucket, key)
}
