use async_trait::async_trait;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use aws_sdk_dynamodb::Client;
use serde_dynamo::{from_item, to_item};

use crate::models::matchmaking::QueueEntry;
use crate::repositories::errors::queue_repository_errors::QueueRepositoryError;

#[cfg(test)]
use mockall::automock;

#[async_trait]
#[cfg_attr(test, automock)]
pub trait QueueRepository: Send + Sync {
    /// Inserts the entry. The table is keyed by `user_name`, so re-queueing
    /// replaces any previous entry for the same player.
    async fn enqueue(&self, entry: &QueueEntry) -> Result<(), QueueRepositoryError>;

    /// Every queued entry whose `user_name` differs from the requester's.
    async fn find_candidates(
        &self,
        excluded_user_name: &str,
    ) -> Result<Vec<QueueEntry>, QueueRepositoryError>;

    /// Deletes the entry for `user_name`. Ok(false) means the store did not
    /// confirm that anything was removed; callers treat that as retryable.
    async fn remove(&self, user_name: &str) -> Result<bool, QueueRepositoryError>;
}

pub struct DynamoDbQueueRepository {
    pub client: Client,
    pub table_name: String,
}

impl DynamoDbQueueRepository {
    pub fn new(client: Client, table_name: String) -> Self {
        Self { client, table_name }
    }
}

#[async_trait]
impl QueueRepository for DynamoDbQueueRepository {
    async fn enqueue(&self, entry: &QueueEntry) -> Result<(), QueueRepositoryError> {
        let item = to_item(entry).map_err(|e| QueueRepositoryError::Serialization(e.to_string()))?;

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(|e| QueueRepositoryError::DynamoDb(e.to_string()))?;

        Ok(())
    }

    async fn find_candidates(
        &self,
        excluded_user_name: &str,
    ) -> Result<Vec<QueueEntry>, QueueRepositoryError> {
        let output = self
            .client
            .scan()
            .table_name(&self.table_name)
            .filter_expression("user_name <> :requester")
            .expression_attribute_values(
                ":requester",
                AttributeValue::S(excluded_user_name.to_string()),
            )
            .send()
            .await
            .map_err(|e| QueueRepositoryError::DynamoDb(e.to_string()))?;

        output
            .items
            .unwrap_or_default()
            .into_iter()
            .map(|item| {
                from_item(item).map_err(|e| QueueRepositoryError::Serialization(e.to_string()))
            })
            .collect()
    }

    async fn remove(&self, user_name: &str) -> Result<bool, QueueRepositoryError> {
        let output = self
            .client
            .delete_item()
            .table_name(&self.table_name)
            .key("user_name", AttributeValue::S(user_name.to_string()))
            .return_values(ReturnValue::AllOld)
            .send()
            .await
            .map_err(|e| QueueRepositoryError::DynamoDb(e.to_string()))?;

        Ok(output.attributes.is_some())
    }
}
