use crate::{
    configuration::Settings,
    presenter::Presenter,
    services::{ContactForm, WebhookClient},
};

/// Wire a contact form from validated settings. Configuration is
/// passed in explicitly; nothing here reads ambient state.
pub fn build<P: Presenter>(settings: &Settings, presenter: P) -> ContactForm<P> {
    let client = WebhookClient::new(
        settings.webhook.url.clone(),
        settings.webhook.api_key.clone(),
        settings.webhook.timeout(),
    );

    ContactForm::new(client, presenter)
}
