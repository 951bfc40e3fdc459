//! Collection-bound convenience facade.
//!
//! A [`CollectionLogger`] binds to one named collection at construction
//! (name resolution plus one schema fetch) and from then on translates
//! every row passed in or returned through the property codec. The cached
//! schema is read-only for the life of the instance; a schema change on
//! the server requires constructing a new logger.

use log::debug;
use serde_json::Value as JsonValue;

use crate::client::NotebaseLinkClient;
use crate::codec;
use crate::error::{NotebaseLinkError, Result};
use crate::models::{
    AppendBlocksRequest, BlockSpec, CollectionSummary, CreateRowRequest, DataTable, Page,
    ParentRef, PropertyValue, QueryOptions, QueryRequest, RemoteRow, RowRecord, Schema,
    SearchRequest, SortSpec, UpdateRowRequest, DEFAULT_PAGE_SIZE,
};

/// Row-level CRUD and page-content operations for one collection.
///
/// # Examples
///
/// ```rust,no_run
/// use notebase_link::{CollectionLogger, NotebaseLinkClient, QueryOptions, RowRecord};
///
/// # async fn example() -> notebase_link::Result<()> {
/// let client = NotebaseLinkClient::builder()
///     .base_url("https://api.notebase.example")
///     .bearer_token("secret_abc123")
///     .build()?;
///
/// let logger = CollectionLogger::connect(client, "Experiments")
///     .await?
///     .with_unique_property("Run ID");
///
/// logger
///     .insert(
///         &RowRecord::new().with("Run ID", "run-14").with("Score", 0.873),
///         None,
///     )
///     .await?;
///
/// let table = logger.get_rows_table(QueryOptions::new()).await?;
/// println!("{} rows", table.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CollectionLogger {
    client: NotebaseLinkClient,
    collection_name: String,
    collection_id: String,
    schema: Schema,
    unique_property: Option<String>,
}

impl CollectionLogger {
    /// Bind to the collection with the given title.
    ///
    /// Resolves the collection id through search (exact, case-sensitive
    /// comparison against the first title segment) and fetches the
    /// schema. Fails with [`NotebaseLinkError::NotFound`] when no
    /// collection carries that title; the failure is fatal for this
    /// instance — there is no lazy re-resolution.
    pub async fn connect(client: NotebaseLinkClient, collection_name: &str) -> Result<Self> {
        let collection_id = resolve_collection_id(&client, collection_name).await?;
        let meta = client.retrieve_collection(&collection_id).await?;
        let schema = Schema::from_properties(&meta.properties);
        debug!(
            "[LOGGER] Bound to collection '{}' ({}) with {} properties",
            collection_name,
            collection_id,
            schema.len()
        );
        Ok(Self {
            client,
            collection_name: collection_name.to_string(),
            collection_id,
            schema,
            unique_property: None,
        })
    }

    /// Set the instance-default uniqueness property used by the insert
    /// and update paths when no per-call override is given.
    pub fn with_unique_property(mut self, property: impl Into<String>) -> Self {
        self.unique_property = Some(property.into());
        self
    }

    pub fn collection_name(&self) -> &str {
        &self.collection_name
    }

    pub fn collection_id(&self) -> &str {
        &self.collection_id
    }

    /// The cached schema.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Enumerate all collections visible to the current credentials.
    pub async fn list_collections(&self) -> Result<Vec<CollectionSummary>> {
        let mut summaries = Vec::new();
        let mut cursor: Option<String> = None;
        loop {
            let mut request = SearchRequest::collections(None);
            request.page_size = Some(DEFAULT_PAGE_SIZE);
            request.start_cursor = cursor;

            let Page {
                results,
                next_cursor,
                ..
            } = self.client.search(&request).await?;
            for result in results {
                let title = result.title_text().unwrap_or("").to_string();
                summaries.push(CollectionSummary {
                    id: result.id,
                    title,
                });
            }
            match next_cursor {
                Some(next) => cursor = Some(next),
                None => break,
            }
        }
        debug!("[SEARCH] Listed {} collections", summaries.len());
        Ok(summaries)
    }

    /// Fetch every row matching `options`, following the continuation
    /// cursor until the server reports none remaining.
    pub async fn get_rows(&self, options: QueryOptions) -> Result<Vec<RemoteRow>> {
        let sorts = options
            .sorts
            .unwrap_or_else(|| vec![SortSpec::by_created_time(options.order)]);
        let page_size = options.page_size.unwrap_or(DEFAULT_PAGE_SIZE);

        let mut rows = Vec::new();
        let mut cursor: Option<String> = None;
        loop {
            let request = QueryRequest {
                filter: options.filter.clone(),
                sorts: Some(sorts.clone()),
                page_size,
                start_cursor: cursor,
            };
            let Page {
                results,
                next_cursor,
                ..
            } = self
                .client
                .query_collection(&self.collection_id, &request)
                .await?;
            rows.extend(results);
            match next_cursor {
                Some(next) => cursor = Some(next),
                None => break,
            }
        }
        debug!(
            "[QUERY] Retrieved {} rows from '{}'",
            rows.len(),
            self.collection_name
        );
        Ok(rows)
    }

    /// Like [`get_rows`](Self::get_rows), decoded into a [`DataTable`]
    /// with one column per schema property.
    pub async fn get_rows_table(&self, options: QueryOptions) -> Result<DataTable> {
        let rows = self.get_rows(options).await?;
        let mut records = Vec::with_capacity(rows.len());
        for row in &rows {
            records.push(codec::decode_row(row, &self.schema)?);
        }
        Ok(DataTable::from_records(&self.schema, &records))
    }

    /// Fetch one row directly by id.
    pub async fn get_row_by_id(&self, row_id: &str) -> Result<RemoteRow> {
        self.client.get_row(row_id).await
    }

    /// Find the single row matching the equality predicate.
    ///
    /// Fails with [`NotebaseLinkError::NoMatch`] on zero matches and
    /// [`NotebaseLinkError::AmbiguousMatch`] on more than one.
    pub async fn find_row(&self, predicate: &RowRecord) -> Result<RemoteRow> {
        let mut matches = self.query_by_predicate(predicate).await?;
        match matches.len() {
            0 => Err(NotebaseLinkError::NoMatch(describe_predicate(predicate))),
            1 => Ok(matches.remove(0)),
            n => Err(NotebaseLinkError::AmbiguousMatch(format!(
                "{} rows matched {}",
                n,
                describe_predicate(predicate)
            ))),
        }
    }

    /// [`find_row`](Self::find_row), decoded with the row id under `id`.
    pub async fn find_row_record(&self, predicate: &RowRecord) -> Result<RowRecord> {
        let row = self.find_row(predicate).await?;
        codec::decode_row_with_id(&row, &self.schema)
    }

    /// Find all rows matching the equality predicate; at least one is
    /// required.
    pub async fn find_rows(&self, predicate: &RowRecord) -> Result<Vec<RemoteRow>> {
        let matches = self.query_by_predicate(predicate).await?;
        if matches.is_empty() {
            return Err(NotebaseLinkError::NoMatch(describe_predicate(predicate)));
        }
        Ok(matches)
    }

    /// [`find_rows`](Self::find_rows), each decoded with its id.
    pub async fn find_rows_records(&self, predicate: &RowRecord) -> Result<Vec<RowRecord>> {
        let rows = self.find_rows(predicate).await?;
        let mut records = Vec::with_capacity(rows.len());
        for row in &rows {
            records.push(codec::decode_row_with_id(row, &self.schema)?);
        }
        Ok(records)
    }

    /// Insert a row.
    ///
    /// When a uniqueness property applies (per-call override or instance
    /// default), one probe query runs first and a hit fails with
    /// [`NotebaseLinkError::DuplicateValue`] before any create call.
    pub async fn insert(
        &self,
        record: &RowRecord,
        unique_property: Option<&str>,
    ) -> Result<RemoteRow> {
        if let Some(property) = self.unique_property_for(unique_property) {
            let value = self.unique_value(record, property)?;
            let existing = self.probe_unique(property, &value).await?;
            if !existing.is_empty() {
                return Err(NotebaseLinkError::DuplicateValue {
                    property: property.to_string(),
                    value: value.to_string(),
                });
            }
        }
        self.create(record).await
    }

    /// Insert, or update the existing row carrying the same unique value.
    pub async fn insert_or_update(
        &self,
        record: &RowRecord,
        unique_property: Option<&str>,
    ) -> Result<RemoteRow> {
        let property = match self.unique_property_for(unique_property) {
            Some(property) => property,
            None => return self.create(record).await,
        };
        let value = self.unique_value(record, property)?;
        let existing = self.probe_unique(property, &value).await?;
        if existing.is_empty() {
            debug!(
                "[UPSERT] No row with {}='{}', inserting",
                property, value
            );
            self.create(record).await
        } else {
            debug!(
                "[UPSERT] Found existing row with {}='{}', updating",
                property, value
            );
            self.update_row(record, Some(property)).await
        }
    }

    /// Update the single row identified by the uniqueness property,
    /// overwriting only the keys the record supplies.
    ///
    /// Ambiguity is a hard failure here too: more than one matching row
    /// fails with [`NotebaseLinkError::AmbiguousMatch`].
    pub async fn update_row(
        &self,
        record: &RowRecord,
        unique_property: Option<&str>,
    ) -> Result<RemoteRow> {
        let property = self.unique_property_for(unique_property).ok_or_else(|| {
            NotebaseLinkError::ConfigurationError(
                "update_row requires a unique property (per call or via with_unique_property)"
                    .into(),
            )
        })?;
        let value = self.unique_value(record, property)?;

        let predicate = RowRecord::new().with(property, value);
        let existing = self.find_row(&predicate).await?;

        let properties = codec::encode_row(record, &self.schema)?;
        let request = UpdateRowRequest::properties(properties);
        self.client.update_row(&existing.id, &request).await
    }

    /// Soft-delete (archive) a row by id. There is no hard delete path.
    pub async fn delete_row(&self, row_id: &str) -> Result<()> {
        self.client
            .update_row(row_id, &UpdateRowRequest::archive())
            .await?;
        debug!("[ROW] Archived row {}", row_id);
        Ok(())
    }

    /// List a page's block children (opaque records), following the
    /// continuation cursor.
    pub async fn list_blocks(&self, page_id: &str) -> Result<Vec<JsonValue>> {
        let mut blocks = Vec::new();
        let mut cursor: Option<String> = None;
        loop {
            let Page {
                results,
                next_cursor,
                ..
            } = self
                .client
                .list_block_children(page_id, cursor.as_deref())
                .await?;
            blocks.extend(results);
            match next_cursor {
                Some(next) => cursor = Some(next),
                None => break,
            }
        }
        Ok(blocks)
    }

    /// Append one content block to a page; returns the created block
    /// records.
    pub async fn append_block(&self, page_id: &str, block: &BlockSpec) -> Result<Vec<JsonValue>> {
        let request = AppendBlocksRequest {
            children: vec![block.to_json()?],
        };
        let page = self.client.append_block_children(page_id, &request).await?;
        debug!("[BLOCKS] Appended {} block to page {}", block.kind(), page_id);
        Ok(page.results)
    }

    /// Append a container block with nested children.
    pub async fn append_nested_blocks(
        &self,
        page_id: &str,
        container: &BlockSpec,
        children: &[BlockSpec],
    ) -> Result<Vec<JsonValue>> {
        let request = AppendBlocksRequest {
            children: vec![container.to_json_with_children(children)?],
        };
        let page = self.client.append_block_children(page_id, &request).await?;
        Ok(page.results)
    }

    /// Binary image upload is not available through the public API.
    ///
    /// Always fails with [`NotebaseLinkError::UnsupportedOperation`];
    /// reference a hosted image with
    /// [`BlockSpec::external_image`] instead.
    pub async fn upload_image(&self, _page_id: &str, _file_name: &str) -> Result<()> {
        Err(NotebaseLinkError::UnsupportedOperation(
            "binary image upload is not available through the public API; \
             append an external-image block referencing a hosted URL instead"
                .to_string(),
        ))
    }

    async fn query_by_predicate(&self, predicate: &RowRecord) -> Result<Vec<RemoteRow>> {
        let filter = codec::build_equality_filter(&self.schema, predicate)?;
        self.get_rows(QueryOptions::new().with_filter(filter)).await
    }

    async fn probe_unique(&self, property: &str, value: &PropertyValue) -> Result<Vec<RemoteRow>> {
        let predicate = RowRecord::new().with(property, value.clone());
        self.query_by_predicate(&predicate).await
    }

    async fn create(&self, record: &RowRecord) -> Result<RemoteRow> {
        let properties = codec::encode_row(record, &self.schema)?;
        let request = CreateRowRequest {
            parent: ParentRef {
                collection_id: self.collection_id.clone(),
            },
            properties,
        };
        let row = self.client.create_row(&request).await?;
        debug!(
            "[ROW] Created row {} in '{}'",
            row.id, self.collection_name
        );
        Ok(row)
    }

    fn unique_property_for<'a>(&'a self, per_call: Option<&'a str>) -> Option<&'a str> {
        per_call.or(self.unique_property.as_deref())
    }

    fn unique_value(&self, record: &RowRecord, property: &str) -> Result<PropertyValue> {
        match record.get(property) {
            Some(value) if !value.is_null() => Ok(value.clone()),
            _ => Err(NotebaseLinkError::MissingUniqueValue(property.to_string())),
        }
    }
}

async fn resolve_collection_id(
    client: &NotebaseLinkClient,
    collection_name: &str,
) -> Result<String> {
    let request = SearchRequest::collections(Some(collection_name));
    let page = client.search(&request).await?;
    for result in page.results {
        // Exact, case-sensitive comparison against the first title
        // segment, matching the server's search semantics.
        if result.title_text() == Some(collection_name) {
            return Ok(result.id);
        }
    }
    Err(NotebaseLinkError::NotFound(format!(
        "collection '{}' was not found",
        collection_name
    )))
}

fn describe_predicate(predicate: &RowRecord) -> String {
    let pairs: Vec<String> = predicate
        .iter()
        .map(|(name, value)| format!("{}='{}'", name, value))
        .collect();
    format!("predicate {{{}}}", pairs.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_predicate_formats_pairs() {
        let predicate = RowRecord::new().with("Status", "Done").with("Score", 1.0);
        assert_eq!(
            describe_predicate(&predicate),
            "predicate {Score='1', Status='Done'}"
        );
    }
}
