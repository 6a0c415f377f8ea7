use crate::bootstrap::resolve_fallback_identity;
use dnstap_flat_application::use_cases::FlattenDnstapUseCase;
use dnstap_flat_domain::Config;
use dnstap_flat_infrastructure::dns::HickoryWireDecoder;
use std::sync::Arc;
use tracing::info;

pub struct Services {
    pub flatten: Arc<FlattenDnstapUseCase>,
}

impl Services {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let masks = config.anonymize.masks()?;
        let fallback_identity = resolve_fallback_identity(config);

        info!(
            ipv4_mask = %masks.ipv4_mask(),
            ipv6_mask = %masks.ipv6_mask(),
            fallback_identity = %fallback_identity,
            "Flattening configured"
        );

        let decoder = Arc::new(HickoryWireDecoder::new());
        let flatten = Arc::new(FlattenDnstapUseCase::new(decoder, masks, fallback_identity));

        Ok(Self { flatten })
    }
}
