use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to render {template} template: {source}")]
    Template {
        template: &'static str,
        #[source]
        source: askama::Error,
    },
}

impl RenderError {
    pub(crate) fn template(template: &'static str) -> impl FnOnce(askama::Error) -> Self {
        move |source| RenderError::Template { template, source }
    }
}
