use anyhow::Result;
use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use tracing::info;
use uuid::Uuid;

use crate::assessment::upload::ResumeFile;

/// Object key for one uploaded resume. `upload_id` is fresh per submission
/// attempt, so concurrent submits of one draft never share an object.
pub fn resume_key(assessment_id: Uuid, upload_id: Uuid, file_name: &str) -> String {
    format!("resumes/{assessment_id}/{upload_id}/{file_name}")
}

/// Blob storage for uploaded resumes.
#[async_trait]
pub trait ResumeStore: Send + Sync {
    async fn put(&self, key: &str, file: &ResumeFile) -> Result<()>;
    async fn get(&self, key: &str) -> Result<Bytes>;
    async fn delete(&self, key: &str) -> Result<()>;
}

/// S3 / MinIO backed resume storage.
#[derive(Clone)]
pub struct S3ResumeStore {
    client: aws_sdk_s3::Client,
    bucket: String,
}

impl S3ResumeStore {
    pub fn new(client: aws_sdk_s3::Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }
}

#[async_trait]
impl ResumeStore for S3ResumeStore {
    async fn put(&self, key: &str, file: &ResumeFile) -> Result<()> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(file.bytes.clone()))
            .content_type(&file.mime)
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("S3 upload failed: {e}"))?;

        info!(
            "Uploaded resume ({} bytes) to s3://{}/{}",
            file.size(),
            self.bucket,
            key
        );
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Bytes> {
        let object = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("S3 download failed: {e}"))?;

        let data = object
            .body
            .collect()
            .await
            .map_err(|e| anyhow::anyhow!("S3 body read failed: {e}"))?;
        Ok(data.into_bytes())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("S3 delete failed: {e}"))?;

        info!("Deleted s3://{}/{}", self.bucket, key);
        Ok(())
    }
}
