use crate::client::model::error::ApiError;

#[derive(Clone, Default, PartialEq)]
pub enum Cache<T> {
    #[default]
    NotFetched,
    Loading,
    Fetched(T),
    Error(ApiError),
}

impl<T> Cache<T> {
    /// True until the first request has either succeeded or failed
    pub fn is_pending(&self) -> bool {
        matches!(self, Cache::NotFetched | Cache::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Cache::Fetched(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            Cache::Error(error) => Some(error),
            _ => None,
        }
    }
}

/// Cache for data scoped to a single unit.
///
/// Remembers which unit the entry belongs to so a unit switch can be told
/// apart from a background refetch of the same unit.
#[derive(Clone, Default, PartialEq)]
pub enum UnitCache<T> {
    #[default]
    NotFetched,
    Loading {
        unit_id: i32,
    },
    Fetched {
        unit_id: i32,
        data: T,
    },
    Error {
        unit_id: i32,
        error: ApiError,
    },
}

impl<T> UnitCache<T> {
    pub fn unit_id(&self) -> Option<i32> {
        match self {
            UnitCache::Loading { unit_id }
            | UnitCache::Fetched { unit_id, .. }
            | UnitCache::Error { unit_id, .. } => Some(*unit_id),
            UnitCache::NotFetched => None,
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            UnitCache::Fetched { data, .. } => Some(data),
            _ => None,
        }
    }

    /// Whether nothing has settled yet for `unit_id`.
    ///
    /// Entries held for another unit count as loading.
    pub fn is_loading_for(&self, unit_id: i32) -> bool {
        match self {
            UnitCache::Loading { .. } | UnitCache::NotFetched => true,
            other => other.unit_id() != Some(unit_id),
        }
    }
}
