//! Business-facing sales-channel definitions shown by the inspector.

use std::collections::HashMap;

use once_cell::sync::Lazy;

pub struct ChannelDefinition {
    pub title: &'static str,
    pub definition: &'static str,
    pub primary_contact: &'static str,
}

static CHANNEL_DEFINITIONS: Lazy<HashMap<&'static str, ChannelDefinition>> = Lazy::new(|| {
    HashMap::from([
        (
            "MAJOR_ACCOUNT",
            ChannelDefinition {
                title: "Major Account",
                definition: "High-value, complex customers with dedicated ownership and a regular governance cadence (business reviews, tailored KPIs, contractual customization).",
                primary_contact: "Global / regional account manager.",
            },
        ),
        (
            "KEY_ACCOUNT",
            ChannelDefinition {
                title: "Key Account",
                definition: "Strategic customers managed by key-account teams with end-to-end performance management and controlled onboarding changes.",
                primary_contact: "Key account manager.",
            },
        ),
        (
            "FIELD_SALES",
            ChannelDefinition {
                title: "Field Sales",
                definition: "Face-to-face commercial ownership for domestic customers, focused on growth, retention and local operational alignment.",
                primary_contact: "Field sales executive.",
            },
        ),
        (
            "TELESALES",
            ChannelDefinition {
                title: "Telesales",
                definition: "Remote account ownership for SME customers at scale: standardized onboarding, digital enablement and retention plays.",
                primary_contact: "Inside sales / telesales agent.",
            },
        ),
        (
            "MULTICHANNEL",
            ChannelDefinition {
                title: "Multichannel / Digital",
                definition: "Self-serve onboarding via portal, plugins or API, with low-touch operations and automated lifecycle journeys.",
                primary_contact: "Digital channel support (self-service plus customer service).",
            },
        ),
        (
            "SERVICE_POINTS_RETAIL",
            ChannelDefinition {
                title: "Service Point Retail",
                definition: "Transactional retail and cash customers served through the physical network (parcel shops, lockers).",
                primary_contact: "Service point agent / point of sale.",
            },
        ),
        (
            "PARTNER_MANAGERS",
            ChannelDefinition {
                title: "Partner Managers",
                definition: "Indirect channel where partners resell or integrate services and onboard their own sellers and shippers.",
                primary_contact: "Partner manager.",
            },
        ),
        (
            "INTERNAL",
            ChannelDefinition {
                title: "Internal",
                definition: "Internal customer relationships for inter-company services and internal transfers.",
                primary_contact: "Internal operations lead.",
            },
        ),
    ])
});

/// Definition for a channel value, when one exists.
pub fn channel_definition(channel: &str) -> Option<&'static ChannelDefinition> {
    CHANNEL_DEFINITIONS.get(channel)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_channels_have_definitions() {
        assert!(channel_definition("TELESALES").is_some());
        assert_eq!(
            channel_definition("MAJOR_ACCOUNT").map(|d| d.title),
            Some("Major Account")
        );
    }

    #[test]
    fn unknown_channels_have_none() {
        assert!(channel_definition("CARRIER_PIGEON").is_none());
        assert!(channel_definition("—").is_none());
    }
}
