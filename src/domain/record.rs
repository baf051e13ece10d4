// ============================================================================
// Conversion Record
// What a persistence collaborator stores for one conversion
// ============================================================================

use super::SessionId;
use crate::formatter::CapitalizedAmount;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One successful conversion, stamped at write time.
///
/// `result` is derived once, here; stores keep it verbatim and never
/// recompute it from `amount`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConversionRecord {
    /// Unique record identifier
    pub id: Uuid,

    /// Session the conversion belongs to
    pub session_id: SessionId,

    /// Amount text exactly as entered
    pub amount: String,

    /// Capitalized rendering
    pub result: CapitalizedAmount,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl ConversionRecord {
    pub fn new(session_id: SessionId, amount: String, result: CapitalizedAmount) -> Self {
        Self {
            id: Uuid::new_v4(),
            session_id,
            amount,
            result,
            created_at: Utc::now(),
        }
    }

    pub fn belongs_to(&self, session_id: &SessionId) -> bool {
        self.session_id == *session_id
    }
}

/// Order records for a history listing: newest first.
pub fn sort_newest_first(records: &mut [ConversionRecord]) {
    records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
