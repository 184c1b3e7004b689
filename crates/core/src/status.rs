//! Enumerated text fields stored as `TEXT` columns.
//!
//! Every enum here serializes to its lowercase wire name, parses back from it
//! with [`std::str::FromStr`], and implements `TryFrom<String>` so the
//! database layer can decode rows with `#[sqlx(try_from = "String")]`.

use crate::error::CoreError;

macro_rules! define_text_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($label:literal) {
            $( $(#[$vmeta:meta])* $variant:ident = $val:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $val)] $variant ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The wire / column representation.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $val ),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $val => Ok($name::$variant), )+
                    other => Err($crate::error::CoreError::Validation(format!(
                        "Invalid {} '{}'. Must be one of: {}",
                        $label,
                        other,
                        [$($val),+].join(", ")
                    ))),
                }
            }
        }

        impl TryFrom<String> for $name {
            type Error = $crate::error::CoreError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }
    };
}

pub(crate) use define_text_enum;

define_text_enum! {
    /// Construction phase of a listed project.
    ProjectStatus("project status") {
        Upcoming = "upcoming",
        Ongoing = "ongoing",
        Completed = "completed",
    }
}

define_text_enum! {
    /// Section a blog post is filed under.
    BlogCategory("blog category") {
        News = "news",
        Blog = "blog",
        Media = "media",
        Events = "events",
    }
}

define_text_enum! {
    /// What the visitor asked for on the contact form.
    InquiryType("inquiry type") {
        Callback = "callback",
        Question = "question",
    }
}

define_text_enum! {
    /// Admin follow-up state of a contact inquiry. Any state may move to any
    /// other.
    InquiryStatus("inquiry status") {
        New = "new",
        Contacted = "contacted",
        Closed = "closed",
    }
}

define_text_enum! {
    /// Kind of downloadable resource.
    ResourceCategory("resource category") {
        Brochure = "brochure",
        Ebook = "ebook",
        Faq = "faq",
        Legal = "legal",
        Research = "research",
    }
}

define_text_enum! {
    /// Payment state of a gateway order.
    TransactionStatus("transaction status") {
        Created = "created",
        Paid = "paid",
        Failed = "failed",
    }
}

impl Default for InquiryStatus {
    fn default() -> Self {
        InquiryStatus::New
    }
}

impl TransactionStatus {
    /// Whether a transaction in `self` may be moved to `next`.
    ///
    /// - `created` -> `paid`, `failed`
    /// - `failed`  -> `paid` (retried payment), `failed`
    /// - `paid` is terminal
    pub fn can_transition_to(self, next: TransactionStatus) -> bool {
        matches!(
            (self, next),
            (TransactionStatus::Created, TransactionStatus::Paid)
                | (TransactionStatus::Created, TransactionStatus::Failed)
                | (TransactionStatus::Failed, TransactionStatus::Paid)
                | (TransactionStatus::Failed, TransactionStatus::Failed)
        )
    }

    /// Wire names of every status that may transition into `target`.
    ///
    /// Repositories bind this as `status = ANY($n)` so a guarded update
    /// leaves rows in any other state untouched.
    pub fn sources_for(target: TransactionStatus) -> Vec<&'static str> {
        TransactionStatus::ALL
            .iter()
            .filter(|s| s.can_transition_to(target))
            .map(|s| s.as_str())
            .collect()
    }
}

/// Parse an optional filter query value, treating an empty string as absent.
pub fn parse_filter<T>(value: Option<&str>) -> Result<Option<T>, CoreError>
where
    T: std::str::FromStr<Err = CoreError>,
{
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw.parse().map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_round_trip() {
        for s in ProjectStatus::ALL {
            assert_eq!(s.as_str().parse::<ProjectStatus>().unwrap(), *s);
        }
        for c in ResourceCategory::ALL {
            assert_eq!(c.to_string().parse::<ResourceCategory>().unwrap(), *c);
        }
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&BlogCategory::Events).unwrap();
        assert_eq!(json, "\"events\"");
        let parsed: InquiryType = serde_json::from_str("\"callback\"").unwrap();
        assert_eq!(parsed, InquiryType::Callback);
        assert!(serde_json::from_str::<InquiryType>("\"Callback\"").is_err());
    }

    #[test]
    fn unknown_value_lists_the_allowed_ones() {
        let err = "archived".parse::<ProjectStatus>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("project status"));
        assert!(msg.contains("upcoming, ongoing, completed"));
    }

    #[test]
    fn try_from_string_matches_from_str() {
        assert_eq!(
            TransactionStatus::try_from("paid".to_string()).unwrap(),
            TransactionStatus::Paid
        );
        assert!(TransactionStatus::try_from("PAID".to_string()).is_err());
    }

    #[test]
    fn paid_is_terminal() {
        for next in TransactionStatus::ALL {
            assert!(!TransactionStatus::Paid.can_transition_to(*next));
        }
    }

    #[test]
    fn sources_never_include_paid() {
        assert_eq!(
            TransactionStatus::sources_for(TransactionStatus::Paid),
            vec!["created", "failed"]
        );
        assert_eq!(
            TransactionStatus::sources_for(TransactionStatus::Failed),
            vec!["created", "failed"]
        );
        assert!(TransactionStatus::sources_for(TransactionStatus::Created).is_empty());
    }

    #[test]
    fn empty_filter_is_absent() {
        assert_eq!(parse_filter::<ProjectStatus>(None).unwrap(), None);
        assert_eq!(parse_filter::<ProjectStatus>(Some("")).unwrap(), None);
        assert_eq!(
            parse_filter::<ProjectStatus>(Some("upcoming")).unwrap(),
            Some(ProjectStatus::Upcoming)
        );
        assert!(parse_filter::<ProjectStatus>(Some("sold")).is_err());
    }
}
