use members_business::{BusinessConfig, register};
use members_states::StateCtx;

/// The main application state.
pub struct State {
    /// The state context for business logic.
    pub ctx: StateCtx,
}

impl State {
    pub fn new(config: BusinessConfig) -> Self {
        let mut ctx = StateCtx::new();
        register(&mut ctx, config);
        Self { ctx }
    }

    /// State pointed at a test data source, e.g. a mock server.
    pub fn test(members_url: String) -> Self {
        Self::new(BusinessConfig::new(members_url))
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(BusinessConfig::default())
    }
}
