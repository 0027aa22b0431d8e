//! The measurement batch.

use crate::{BatchOutcome, BatchStatus, Clock, SystemClock};
use media_ratio_core::{
    ASPECT_RATIO_META, AttachmentId, RatioCatalog, RatioValue, SAFETY_MARGIN_SECS, TimeLimit,
};
use media_ratio_error::MediaRatioResult;
use media_ratio_storage::{AttachmentIndex, AttachmentMetaStore, AttachmentQuery, StoredNames};
use tracing::{debug, error, info, instrument, warn};

/// Measures unclassified images against a store, within a time budget.
///
/// Images are processed one at a time in ascending identifier order. After
/// each write the elapsed time is compared against the budget (the time limit
/// less a safety margin); once it is exceeded the run stops and reports
/// [`BatchStatus::Partial`]. At least one image is always processed when any
/// are selected.
///
/// A failing store aborts the batch and the error is returned. Images written
/// before the failure keep their ratios.
pub struct BatchClassifier<'a, S: ?Sized, C = SystemClock> {
    store: &'a S,
    catalog: &'a RatioCatalog,
    names: StoredNames,
    clock: C,
    safety_margin_secs: u64,
}

impl<'a, S> BatchClassifier<'a, S, SystemClock>
where
    S: AttachmentIndex + AttachmentMetaStore + ?Sized,
{
    /// A classifier using the system clock, default names and default margin.
    pub fn new(store: &'a S, catalog: &'a RatioCatalog) -> Self {
        Self {
            store,
            catalog,
            names: StoredNames::default(),
            clock: SystemClock,
            safety_margin_secs: SAFETY_MARGIN_SECS,
        }
    }
}

impl<'a, S, C> BatchClassifier<'a, S, C>
where
    S: AttachmentIndex + AttachmentMetaStore + ?Sized,
    C: Clock,
{
    /// Swap the time source.
    pub fn with_clock<D: Clock>(self, clock: D) -> BatchClassifier<'a, S, D> {
        BatchClassifier {
            store: self.store,
            catalog: self.catalog,
            names: self.names,
            clock,
            safety_margin_secs: self.safety_margin_secs,
        }
    }

    /// Use different stored-name prefixes.
    pub fn with_names(mut self, names: StoredNames) -> Self {
        self.names = names;
        self
    }

    /// Seconds reserved out of the time limit for reporting.
    pub fn with_safety_margin(mut self, secs: u64) -> Self {
        self.safety_margin_secs = secs;
        self
    }

    fn ratio_key(&self) -> String {
        self.names.meta(ASPECT_RATIO_META)
    }

    /// Images with no stored ratio, ascending.
    pub async fn unclassified(&self) -> MediaRatioResult<Vec<AttachmentId>> {
        self.store
            .find_ids(&AttachmentQuery::unmeasured_images(self.ratio_key()))
            .await
    }

    /// Measure one image and store its ratio.
    ///
    /// Missing dimensions store the `0` sentinel. Running this twice for the
    /// same image leaves the same value.
    #[instrument(skip(self), fields(attachment_id = %id))]
    pub async fn classify(&self, id: AttachmentId) -> MediaRatioResult<RatioValue> {
        let dimensions = self.store.dimensions(id).await?;
        let ratio = dimensions.ratio();

        if ratio.is_unmeasured() {
            warn!(?dimensions, "Image has no usable dimensions, storing sentinel");
        }

        self.store
            .update_meta(id, &self.ratio_key(), &ratio.to_string())
            .await?;

        match self.catalog.get(ratio) {
            Some(known) => debug!(ratio = %ratio, label = %known.label(), "Matched catalog ratio"),
            None => debug!(ratio = %ratio, "Ratio not in catalog"),
        }

        Ok(ratio)
    }

    /// Resolve a raw `--time-limit` flag then run.
    ///
    /// Absent, non-numeric or negative input uses `default_secs`.
    pub async fn run_with_flag(
        &self,
        time_limit: Option<&str>,
        default_secs: u64,
    ) -> MediaRatioResult<BatchOutcome> {
        self.run(TimeLimit::from_flag(time_limit, default_secs)).await
    }

    /// Measure every unclassified image, stopping early when the budget runs out.
    ///
    /// # Errors
    ///
    /// Propagates the first store failure; the batch stops there.
    #[instrument(skip(self, time_limit), fields(time_limit = %time_limit))]
    pub async fn run(&self, time_limit: TimeLimit) -> MediaRatioResult<BatchOutcome> {
        let ids = self.unclassified().await?;

        if ids.is_empty() {
            info!("No unmeasured images");
            return Ok(BatchOutcome::nothing_to_do());
        }

        // The budget covers measuring only, not selecting.
        let start = self.clock.now();

        let budget = time_limit.budget(self.safety_margin_secs);
        let selected = ids.len();
        let mut processed = 0;
        let mut matched = 0;
        let mut status = BatchStatus::Complete;

        info!(selected, ?budget, "Measuring images");

        for (index, id) in ids.iter().copied().enumerate() {
            let ratio = self.classify(id).await.inspect_err(|e| {
                error!(attachment_id = %id, processed, selected, error = %e, "Measurement aborted");
            })?;

            processed += 1;
            if self.catalog.contains(ratio) {
                matched += 1;
            }

            let elapsed = self.clock.now().saturating_duration_since(start);
            if budget.exceeded_by(elapsed) {
                if index + 1 < selected {
                    status = BatchStatus::Partial;
                }
                debug!(elapsed_ms = elapsed.as_millis() as u64, "Time budget used up");
                break;
            }
        }

        let elapsed_ms = self.clock.now().saturating_duration_since(start).as_millis() as u64;
        info!(%status, processed, selected, matched, elapsed_ms, "Measurement finished");

        Ok(BatchOutcome::new(status, processed, selected, matched, elapsed_ms))
    }
}
