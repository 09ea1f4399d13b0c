//! A support address may only be the default once its email forwarding is verified.

use crate::change::Change;
use crate::element::InstanceElement;
use crate::validation::engine::ChangeError;

pub const SUPPORT_ADDRESS_TYPE_NAME: &str = "support_address";

const DEFAULT_FIELD: &str = "default";
const FORWARDING_STATUS_FIELD: &str = "forwarding_status";
const VERIFIED: &str = "verified";

/// Flag support addresses marked as default whose forwarding is not verified
pub fn default_support_address_validator(changes: &[Change]) -> Vec<ChangeError> {
    changes
        .iter()
        .filter_map(Change::after)
        .filter(|instance| instance.type_name() == SUPPORT_ADDRESS_TYPE_NAME)
        .filter(|instance| is_unverified_default(instance))
        .map(unverified_default_error)
        .collect()
}

// Absent fields never match.
fn is_unverified_default(instance: &InstanceElement) -> bool {
    instance.bool_field(DEFAULT_FIELD) == Some(true)
        && instance
            .field(FORWARDING_STATUS_FIELD)
            .is_some_and(|status| status.as_str() != Some(VERIFIED))
}

fn unverified_default_error(instance: &InstanceElement) -> ChangeError {
    let full_name = instance.elem_id.full_name();
    ChangeError::error(
        instance.elem_id.clone(),
        "Email: Cannot be a default until it's forwarding is verified".to_string(),
        format!(
            "{full_name} has default field true and forwarding_status field that is not verified\n\
             In order to successfully deploy, go to {full_name} and change the default field from true to false\n\
             In order verify, go to the admin center in your zendesk application, search for 'email' and choose 'Email', \
             find the email that is not verified (there should be a red ! under it), click on 'See details' and Verify forwarding"
        ),
    )
}
