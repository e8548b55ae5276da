//! Core identifier types and runtime utilities for the marketplace backend.
//!
//! This crate provides the typed-ID foundation shared by every domain crate,
//! plus process-level conveniences (logging bootstrap) behind the `server`
//! feature.

// ============================================================================
// TRAITS
// ============================================================================
/// Unique identifier trait for domain entities.
pub trait Unique<T = Self> {
    fn id(&self) -> ID<T>;
}

// ============================================================================
// IDENTITY TYPES
// ============================================================================
use std::cmp::Ordering;
use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::hash::Hash;
use std::hash::Hasher;
use std::marker::PhantomData;

/// Generic ID wrapper providing compile-time type safety over row ids.
///
/// Identifiers are assigned by the database (BIGSERIAL), so there is no
/// client-side constructor beyond [`From<i64>`].
pub struct ID<T> {
    inner: i64,
    marker: PhantomData<T>,
}

impl<T> ID<T> {
    pub fn inner(&self) -> i64 {
        self.inner
    }
}

impl<T> From<ID<T>> for i64 {
    fn from(id: ID<T>) -> Self {
        id.inner()
    }
}
impl<T> From<i64> for ID<T> {
    fn from(inner: i64) -> Self {
        Self {
            inner,
            marker: PhantomData,
        }
    }
}

impl<T> Copy for ID<T> {}
impl<T> Clone for ID<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Eq for ID<T> {}
impl<T> PartialEq for ID<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T> Ord for ID<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}
impl<T> PartialOrd for ID<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Hash for ID<T> {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.inner.hash(state);
    }
}

impl<T> Debug for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ID").field(&self.inner).finish()
    }
}
impl<T> Display for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.inner, f)
    }
}

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Marker;

    #[test]
    fn id_roundtrips_through_i64() {
        let id: ID<Marker> = ID::from(42);
        assert_eq!(id.inner(), 42);
        assert_eq!(i64::from(id), 42);
    }

    #[test]
    fn id_equality_and_ordering() {
        let a: ID<Marker> = ID::from(1);
        let b: ID<Marker> = ID::from(2);
        assert!(a < b);
        assert_eq!(a, ID::from(1));
        assert_ne!(a, b);
    }
}
