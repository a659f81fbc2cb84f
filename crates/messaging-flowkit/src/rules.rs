use serde::{Deserialize, Serialize};

/// Closed set of interactive element kinds the transport understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    QuickReply,
    CtaUrl,
    CtaCopy,
    CtaCall,
    SingleSelect,
    AddressMessage,
    SendLocation,
    Mpm,
}

impl ElementKind {
    /// Resolve a kind tag. `None` is a distinct outcome the validator turns
    /// into an error; unrecognized kinds are never accepted without checks.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "quick_reply" => Some(Self::QuickReply),
            "cta_url" => Some(Self::CtaUrl),
            "cta_copy" => Some(Self::CtaCopy),
            "cta_call" => Some(Self::CtaCall),
            "single_select" => Some(Self::SingleSelect),
            "address_message" => Some(Self::AddressMessage),
            "send_location" => Some(Self::SendLocation),
            "mpm" => Some(Self::Mpm),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::QuickReply => "quick_reply",
            Self::CtaUrl => "cta_url",
            Self::CtaCopy => "cta_copy",
            Self::CtaCall => "cta_call",
            Self::SingleSelect => "single_select",
            Self::AddressMessage => "address_message",
            Self::SendLocation => "send_location",
            Self::Mpm => "mpm",
        }
    }

    /// Mandatory parameter fields, in the order violations are reported.
    pub fn required_fields(self) -> &'static [&'static str] {
        match self {
            Self::QuickReply => &["display_text", "id"],
            Self::CtaUrl => &["display_text", "url"],
            Self::CtaCopy => &["display_text", "copy_code"],
            Self::CtaCall => &["display_text", "phone_number"],
            Self::SingleSelect => &["title", "sections"],
            Self::AddressMessage => &["display_text"],
            Self::SendLocation => &["display_text"],
            Self::Mpm => &["product_id"],
        }
    }

    /// Kinds whose `sections` parameter nests section/row structure.
    pub fn has_sections(self) -> bool {
        matches!(self, Self::SingleSelect)
    }
}
