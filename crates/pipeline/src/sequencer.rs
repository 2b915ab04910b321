//! Drives the generation step across a whole flow strategy.
//!
//! Every context is computed before the first call, so generation fans out
//! with bounded concurrency while results are still collected in email
//! order. A failed step never aborts the run: it is replaced by a
//! fallback draft carrying the error, so the output always has one entry
//! per planned email.

use copyforge_core::brand::BrandProfile;
use copyforge_core::context::{assemble_contexts, FlowContext};
use copyforge_core::flow::{FlowProgress, GeneratedEmail};
use copyforge_core::strategy::{EmailStrategy, FlowStrategy};
use futures::stream::{self, StreamExt};

use crate::generation::CopyGenerator;

/// Default number of generation calls in flight.
pub const DEFAULT_CONCURRENCY: usize = 3;

pub struct Sequencer {
    generator: CopyGenerator,
    concurrency: usize,
}

impl Sequencer {
    /// `concurrency` of 1 runs strictly one email at a time.
    pub fn new(generator: CopyGenerator, concurrency: usize) -> Self {
        Self {
            generator,
            concurrency: concurrency.max(1),
        }
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Generate every email of `strategy`, in email order.
    ///
    /// `on_progress` is called once per email as results are collected.
    pub async fn run<F>(
        &self,
        strategy: &FlowStrategy,
        brand: &BrandProfile,
        mut on_progress: F,
    ) -> Vec<GeneratedEmail>
    where
        F: FnMut(FlowProgress) + Send,
    {
        let contexts = assemble_contexts(strategy);
        let total = contexts.len() as u32;

        tracing::info!(
            flow_type = %strategy.flow_type,
            total,
            concurrency = self.concurrency,
            "Starting flow generation"
        );

        let steps = stream::iter(strategy.email_strategies.iter().cloned().zip(contexts))
            .map(|(entry, context)| async move {
                self.step(&entry, context, brand, strategy).await
            })
            .buffered(self.concurrency);
        futures::pin_mut!(steps);

        let mut emails = Vec::with_capacity(total as usize);
        while let Some(email) = steps.next().await {
            on_progress(FlowProgress {
                completed: emails.len() as u32 + 1,
                total,
                email_number: email.email_number,
                fallback: email.is_fallback(),
            });
            emails.push(email);
        }

        let fallbacks = emails.iter().filter(|e| e.is_fallback()).count();
        tracing::info!(
            flow_type = %strategy.flow_type,
            generated = emails.len() - fallbacks,
            fallbacks,
            "Flow generation finished"
        );
        emails
    }

    async fn step(
        &self,
        entry: &EmailStrategy,
        context: FlowContext,
        brand: &BrandProfile,
        strategy: &FlowStrategy,
    ) -> GeneratedEmail {
        tracing::debug!(
            email_number = entry.email_number,
            theme = %entry.theme,
            "Generating flow email"
        );

        match self
            .generator
            .generate_flow_email(
                entry,
                &context,
                brand,
                &strategy.offer,
                &strategy.scraped_insights,
            )
            .await
        {
            Ok(copy_data) => GeneratedEmail::generated(entry, copy_data),
            Err(e) => {
                tracing::warn!(
                    email_number = entry.email_number,
                    error = %e,
                    "Generation failed, substituting fallback draft"
                );
                GeneratedEmail::fallback(entry, e.to_string())
            }
        }
    }
}
