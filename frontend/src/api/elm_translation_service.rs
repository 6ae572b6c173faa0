use std::rc::Rc;

use common::error::{GatewayError, GatewayResult};
use common::gateway::translation::{
    decode_translation, translator_url, MISSING_URL, NON_OK_RESPONSE, QUERY_FLAGS, TIMEOUT_MS,
};
use common::gateway::{bearer, require_base_url};
use common::model::elm::ElmTranslation;
use common::model::service_config::ServiceConfig;
use common::session::SessionProvider;
use futures_util::future::{select, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;

use super::exchange;

/// Client for the CQL-to-ELM translator.
pub struct ElmTranslationServiceApi {
    base_url: Option<String>,
    session: Rc<dyn SessionProvider>,
}

impl ElmTranslationServiceApi {
    pub fn new(config: &ServiceConfig, session: Rc<dyn SessionProvider>) -> Self {
        Self {
            base_url: config.elm_translation_base_url().map(str::to_string),
            session,
        }
    }

    /// Translates `cql`, giving up after [`TIMEOUT_MS`].
    pub async fn translate_cql_to_elm(&self, cql: &str) -> GatewayResult<ElmTranslation> {
        let base_url = require_base_url(self.base_url.as_deref(), MISSING_URL)?;
        let request = Request::put(&translator_url(base_url))
            .header("Authorization", &bearer(&self.session.access_token()))
            .header("Content-Type", "text/plain")
            .query(QUERY_FLAGS)
            .body(cql.to_string());

        let call = Box::pin(exchange(request));
        let timer = Box::pin(TimeoutFuture::new(TIMEOUT_MS));
        let (status, body) = match select(call, timer).await {
            Either::Left((result, _)) => result?,
            Either::Right(_) => return Err(GatewayError::Timeout(TIMEOUT_MS)),
        };

        if status != 200 {
            gloo_console::warn!(NON_OK_RESPONSE, status);
        }
        decode_translation(status, &body)
    }
}
