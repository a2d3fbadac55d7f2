use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::Client;
use aws_sdk_s3::config::Credentials;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::{BucketLocationConstraint, CreateBucketConfiguration};

use crate::config::Config;

use super::{ObjectStorage, StorageError};

/// Archive store backed by S3, or any S3-compatible service when the
/// configuration carries an endpoint override.
#[derive(Debug, Clone)]
pub struct S3Storage {
    client: Client,
    bucket: String,
    region: String,
}

impl S3Storage {
    /// Build a bucket-scoped client from the validated configuration.
    ///
    /// Credentials and region always come from [`Config`], never from the
    /// SDK's default provider chain. The dashboard's variable names are
    /// not the ones the chain looks for.
    pub async fn connect(config: &Config) -> Self {
        let credentials =
            Credentials::from_keys(config.access_key.clone(), config.secret_key.clone(), None);

        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .credentials_provider(credentials);
        if let Some(endpoint) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint.clone());
        }
        let shared = loader.load().await;

        let mut builder = aws_sdk_s3::config::Builder::from(&shared);
        if config.endpoint_url.is_some() {
            // MinIO and friends want path-style addressing.
            builder = builder.force_path_style(true);
        }

        Self {
            client: Client::from_conf(builder.build()),
            bucket: config.bucket_name.clone(),
            region: config.region.clone(),
        }
    }
}

#[async_trait]
impl ObjectStorage for S3Storage {
    fn bucket(&self) -> &str {
        &self.bucket
    }

    async fn bucket_exists(&self) -> Result<bool, StorageError> {
        match self.client.head_bucket().bucket(&self.bucket).send().await {
            Ok(_) => Ok(true),
            Err(err) if err.as_service_error().is_some_and(|e| e.is_not_found()) => Ok(false),
            Err(err) => Err(StorageError::Head {
                bucket: self.bucket.clone(),
                message: DisplayErrorContext(err).to_string(),
            }),
        }
    }

    async fn create_bucket(&self) -> Result<(), StorageError> {
        let mut request = self.client.create_bucket().bucket(&self.bucket);
        if let Some(constraint) = location_constraint(&self.region) {
            let bucket_config = CreateBucketConfiguration::builder()
                .location_constraint(constraint)
                .build();
            request = request.create_bucket_configuration(bucket_config);
        }

        request.send().await.map_err(|err| StorageError::Create {
            bucket: self.bucket.clone(),
            message: DisplayErrorContext(err).to_string(),
        })?;

        Ok(())
    }

    async fn put_object(
        &self,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(|err| StorageError::Put {
                key: key.to_string(),
                message: DisplayErrorContext(err).to_string(),
            })?;

        Ok(())
    }
}

/// S3 rejects an explicit `us-east-1` location constraint; every other
/// region must be spelled out on CreateBucket.
fn location_constraint(region: &str) -> Option<BucketLocationConstraint> {
    if region == "us-east-1" {
        None
    } else {
        Some(BucketLocationConstraint::from(region))
    }
}
