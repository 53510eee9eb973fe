//! # Config Commands
//!
//! Commands for retrieving storefront configuration.

use tracing::debug;

use crate::state::ConfigState;
use crate::Session;

/// Gets the current storefront configuration.
///
/// ## When Used
/// - App startup (store name in the header)
/// - Currency formatting
///
/// ## Returns
/// Complete configuration state (read-only)
pub fn get_config(session: &Session) -> ConfigState {
    debug!("get_config command");
    session.config.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_session;

    #[test]
    fn test_get_config() {
        let session = test_session();
        let config = get_config(&session);
        assert_eq!(config.store_name, "FoodFleet");
        assert_eq!(config.page_size, 8);
    }
}
