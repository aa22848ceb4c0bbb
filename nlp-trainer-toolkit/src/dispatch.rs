//! Task dispatcher: routes a request to exactly one adapter.

use std::sync::Arc;

use nlp_trainer_core::domain::{Backend, Task, TaskOutput, TaskRequest, TaskResult};
use nlp_trainer_core::error::{CoreError, Result};
use tracing::{debug, error};

use crate::adapters;
use crate::resources::Toolkit;

#[derive(Debug, Clone)]
pub struct Dispatcher {
    toolkit: Arc<Toolkit>,
    default_backend: Backend,
}

impl Dispatcher {
    pub fn new(toolkit: Arc<Toolkit>, default_backend: Backend) -> Self {
        Self {
            toolkit,
            default_backend,
        }
    }

    pub fn default_backend(&self) -> Backend {
        self.default_backend
    }

    /// Dispatch from wire names. Unknown tasks fail; unknown or missing
    /// backends fall back to the default backend.
    pub fn dispatch_named(
        &self,
        task: &str,
        backend: Option<&str>,
        text: &str,
        comparison_text: Option<&str>,
    ) -> Result<TaskOutput> {
        let task: Task = task.parse()?;
        let backend = Backend::normalize(backend, self.default_backend);
        let mut request = TaskRequest::new(task, backend, text);
        if let Some(comparison) = comparison_text {
            request = request.with_comparison(comparison);
        }
        self.dispatch(&request)
    }

    pub fn dispatch(&self, request: &TaskRequest) -> Result<TaskOutput> {
        let task = request.task;
        let backend = request.backend;
        debug!(task = %task, backend = %backend, chars = request.text.len(), "Dispatching task");

        self.run(request).map_err(|err| {
            error!(task = %task, backend = %backend, error = %err, "Task failed");
            err
        })
    }

    fn run(&self, request: &TaskRequest) -> Result<TaskOutput> {
        let toolkit = self.toolkit.as_ref();
        let backend = request.backend;
        let text = request.text.as_str();

        let output = match request.task {
            Task::Tokenization => TaskOutput::plain(TaskResult::Tokenization(
                adapters::tokenization(toolkit, backend, text),
            )),
            Task::StopwordRemoval => TaskOutput::plain(TaskResult::StopwordRemoval(
                adapters::stopword_removal(toolkit, backend, text),
            )),
            Task::Lemmatization => TaskOutput::plain(TaskResult::Lemmatization(
                adapters::lemmatization(toolkit, backend, text),
            )),
            Task::PosTagging => TaskOutput::plain(TaskResult::PosTagging(adapters::pos_tagging(
                toolkit, backend, text,
            ))),
            Task::Ner => TaskOutput::plain(TaskResult::Ner(adapters::ner(toolkit, backend, text))),
            // The pipeline style has no scorer of its own for these four.
            Task::SentimentAnalysis => adapters::sentiment(toolkit, text),
            Task::TextSummarization => {
                TaskOutput::plain(TaskResult::TextSummarization(adapters::summarization(toolkit, text)))
            }
            Task::KeywordExtraction => adapters::keyword_extraction(toolkit, text),
            Task::TextSimilarity => {
                let comparison = request.comparison().ok_or_else(|| {
                    CoreError::MissingInput(
                        "Comparison text is required for text similarity analysis".to_string(),
                    )
                })?;
                adapters::similarity(toolkit, text, comparison)?
            }
            Task::LanguageDetection => TaskOutput::plain(TaskResult::LanguageDetection(
                adapters::language_detection(toolkit, backend, text)?,
            )),
        };
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nlp_trainer_core::domain::Visualization;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn dispatcher() -> Dispatcher {
        Dispatcher::new(Arc::new(Toolkit::load()), Backend::Nltk)
    }

    #[test]
    fn tokenization_counts_words() {
        let output = dispatcher()
            .dispatch_named("tokenization", Some("nltk"), "hello world", None)
            .unwrap();
        match output.result {
            TaskResult::Tokenization(result) => assert_eq!(result.word_count, 2),
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(output.visualization.is_none());
    }

    #[test]
    fn unknown_task_is_rejected() {
        let err = dispatcher()
            .dispatch_named("translation", Some("nltk"), "hello world", None)
            .unwrap_err();
        assert_eq!(err, CoreError::UnsupportedTask("translation".to_string()));
    }

    #[test]
    fn unknown_backend_falls_back_to_default() {
        let output = dispatcher()
            .dispatch_named("pos_tagging", Some("stanza"), "The dog barked", None)
            .unwrap();
        match output.result {
            // Penn tags mean the classic style ran.
            TaskResult::PosTagging(result) => assert_eq!(result.pos_tags[0].1, "DT"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn similarity_requires_comparison_text() {
        let err = dispatcher()
            .dispatch_named("text_similarity", None, "some text here", None)
            .unwrap_err();
        assert!(matches!(err, CoreError::MissingInput(_)));

        let err = dispatcher()
            .dispatch_named("text_similarity", None, "some text here", Some(""))
            .unwrap_err();
        assert!(matches!(err, CoreError::MissingInput(_)));
    }

    #[rstest]
    #[case::nltk("nltk")]
    #[case::spacy("spacy")]
    fn similarity_terms_ignore_case(#[case] backend: &str) {
        let output = dispatcher()
            .dispatch_named("text_similarity", Some(backend), "London has cats", Some("london has cats"))
            .unwrap();
        let TaskResult::TextSimilarity(result) = output.result else {
            panic!("unexpected result variant");
        };
        assert!(result.common_terms.contains(&"london".to_string()));
        assert!(result.text1_unique.is_empty());
        assert!(result.text2_unique.is_empty());
    }

    #[test]
    fn visualizations_follow_the_task() {
        let d = dispatcher();
        let sentiment = d.dispatch_named("sentiment_analysis", Some("spacy"), "What a great day", None).unwrap();
        assert!(matches!(sentiment.visualization, Some(Visualization::Series(_))));

        let similarity = d
            .dispatch_named("text_similarity", Some("spacy"), "cats and dogs", Some("dogs and birds"))
            .unwrap();
        assert!(matches!(similarity.visualization, Some(Visualization::Similarity(_))));

        let ner = d.dispatch_named("ner", Some("spacy"), "Paris is lovely", None).unwrap();
        assert!(ner.visualization.is_none());
    }

    #[test]
    fn every_task_dispatches_for_both_backends() {
        let d = dispatcher();
        let text = "Apple opened a new office in London last year. The team loves working there.";
        for task in Task::ALL {
            for backend in Backend::ALL {
                let mut request = TaskRequest::new(task, backend, text);
                if task.needs_comparison() {
                    request = request.with_comparison("The London office of Apple is new.");
                }
                let output = d.dispatch(&request).unwrap();
                assert_eq!(output.result.task(), task);
            }
        }
    }
}
