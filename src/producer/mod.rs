//! Per-event entry point: resolve inputs, orchestrate tagging, publish the
//! result dataset.

pub mod error;


pub use error::{BuildError, ProduceError, ProduceResult};

use tracing::{info, instrument};

use crate::config::Config;
use crate::constants::TRACK_BUILDER_RESOURCE;
use crate::event::{Dataset, EventStore};
use crate::resolve::{VertexSorter, resolve_jets, resolve_leptons, resolve_vertex};
use crate::setup::{SetupError, SetupService};
use crate::tag::{Tagger, TaggerContext, TaggerContextHandle, tag_jets};

/// Produces one ordered tag-result dataset per event.
///
/// Constructed once per job: validates the configuration, fetches the
/// calibration resource from the setup service, and builds the shared
/// tagger context. Per-event work happens in [`produce`]; the context can be
/// re-fetched between processing epochs via [`refresh`].
///
/// [`produce`]: TagProducer::produce
/// [`refresh`]: TagProducer::refresh
pub struct TagProducer<T: Tagger, S: VertexSorter> {
    config: Config,
    tagger: T,
    sorter: S,
    context: TaggerContextHandle,
}

impl<T: Tagger, S: VertexSorter> std::fmt::Debug for TagProducer<T, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TagProducer")
            .field("config", &self.config)
            .field("context", &self.context)
            .finish()
    }
}

impl<T: Tagger, S: VertexSorter> TagProducer<T, S> {
    /// Builds a producer, fetching the track-builder resource once (job
    /// start).
    pub fn new(
        config: Config,
        tagger: T,
        sorter: S,
        setup: &dyn SetupService,
    ) -> Result<Self, BuildError> {
        config.validate()?;
        let builder = setup.track_builder(TRACK_BUILDER_RESOURCE)?;
        let context = TaggerContextHandle::new(TaggerContext::new(
            config.tagger_settings.clone(),
            builder,
        ));
        Ok(Self {
            config,
            tagger,
            sorter,
            context,
        })
    }

    /// Processes one event: resolves jets, leptons, and the reference
    /// vertex, tags every jet in order, and publishes the result dataset
    /// under the configured output label.
    ///
    /// On error nothing is published for this event; the store is left with
    /// its input products untouched.
    #[instrument(skip(self, store), fields(jets = %self.config.jets, leptons = %self.config.leptons))]
    pub fn produce(&self, store: &mut EventStore) -> ProduceResult<()> {
        let jets = resolve_jets(store, &self.config.jets)?;
        let leptons = resolve_leptons(store, &self.config.leptons)?;
        let vertex = resolve_vertex(store, &self.config.primary_vertex, &self.sorter)?;

        let infos = {
            let context = self.context.read();
            tag_jets(&self.tagger, &context, &jets, leptons.candidates(), &vertex)?
        };

        info!(
            jets = jets.len(),
            leptons = leptons.candidates().len(),
            skipped_leptons = leptons.skipped(),
            fitted_vertex = vertex.track_count > 0,
            "event tagged"
        );

        store.put(self.config.output.clone(), Dataset::TagInfos(infos));
        Ok(())
    }

    /// Re-fetches the calibration resource and swaps it into the shared
    /// context. The integrating framework decides when (if ever) to call
    /// this between processing epochs.
    pub fn refresh(&self, setup: &dyn SetupService) -> Result<(), SetupError> {
        let builder = setup.track_builder(TRACK_BUILDER_RESOURCE)?;
        self.context.refresh(builder);
        Ok(())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn tagger(&self) -> &T {
        &self.tagger
    }

    pub fn sorter(&self) -> &S {
        &self.sorter
    }

    /// The shared tagger context handle. Clone it to share the context with
    /// concurrently processed events.
    pub fn context(&self) -> &TaggerContextHandle {
        &self.context
    }
}
