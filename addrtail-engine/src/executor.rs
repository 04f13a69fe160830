//! Sequential and parallel row parsing
//!
//! Both paths return records in input order, so record `i` always belongs
//! to value `i`.

use crate::config::{EngineConfig, ExecutionMode};
use crate::error::Result;
use addrtail_core::{parse_address_tail, AddressComponents};

#[cfg(feature = "parallel")]
use crate::error::EngineError;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

fn parse_row(index: usize, raw: Option<&str>) -> AddressComponents {
    let record = parse_address_tail(raw);
    log::trace!("row {index}: {raw:?} -> {}", record.format);
    record
}

/// Parse values on the calling thread
pub fn parse_sequential(values: &[Option<&str>]) -> Vec<AddressComponents> {
    values
        .iter()
        .enumerate()
        .map(|(i, raw)| parse_row(i, *raw))
        .collect()
}

/// Parse values on a rayon pool.
///
/// With `threads` set, a dedicated pool of that size is built; otherwise
/// the global pool is used.
#[cfg(feature = "parallel")]
pub fn parse_parallel(
    values: &[Option<&str>],
    threads: Option<usize>,
) -> Result<Vec<AddressComponents>> {
    let run = || -> Vec<AddressComponents> {
        values
            .par_iter()
            .enumerate()
            .map(|(i, raw)| parse_row(i, *raw))
            .collect()
    };

    match threads {
        Some(count) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(count)
                .build()
                .map_err(|e| EngineError::ThreadPool(e.to_string()))?;
            Ok(pool.install(run))
        }
        None => Ok(run()),
    }
}

/// Parse values with the mode resolved from `config`.
///
/// Returns the records and the mode actually used.
pub fn parse_all(
    values: &[Option<&str>],
    config: &EngineConfig,
) -> Result<(Vec<AddressComponents>, ExecutionMode)> {
    match config.resolve_mode(values.len()) {
        #[cfg(feature = "parallel")]
        ExecutionMode::Parallel => Ok((
            parse_parallel(values, config.threads)?,
            ExecutionMode::Parallel,
        )),
        #[cfg(not(feature = "parallel"))]
        ExecutionMode::Parallel => {
            log::warn!("built without the `parallel` feature; parsing sequentially");
            Ok((parse_sequential(values), ExecutionMode::Sequential))
        }
        _ => Ok((parse_sequential(values), ExecutionMode::Sequential)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use addrtail_core::FormatTag;

    const VALUES: [Option<&str>; 5] = [
        Some("RALEIGH NC 27601"),
        None,
        Some("09774 DPO AE"),
        Some("   "),
        Some("75008 PARIS FRANCE"),
    ];

    #[test]
    fn test_sequential_keeps_positions() {
        let records = parse_sequential(&VALUES);
        let tags: Vec<_> = records.iter().map(|r| r.format).collect();
        assert_eq!(
            tags,
            vec![
                FormatTag::UsStandard,
                FormatTag::Empty,
                FormatTag::UsMilitary,
                FormatTag::Empty,
                FormatTag::International
            ]
        );
    }

    #[test]
    #[cfg(feature = "parallel")]
    fn test_parallel_matches_sequential() {
        let values: Vec<Option<&str>> = VALUES.iter().copied().cycle().take(500).collect();
        let sequential = parse_sequential(&values);
        assert_eq!(parse_parallel(&values, None).unwrap(), sequential);
        assert_eq!(parse_parallel(&values, Some(3)).unwrap(), sequential);
    }

    #[test]
    fn test_parse_all_reports_mode() {
        let (records, mode) = parse_all(&VALUES, &EngineConfig::sequential()).unwrap();
        assert_eq!(records.len(), VALUES.len());
        assert_eq!(mode, ExecutionMode::Sequential);
    }

    #[test]
    #[cfg(feature = "parallel")]
    fn test_parse_all_parallel() {
        let config = EngineConfig {
            execution_mode: ExecutionMode::Parallel,
            threads: Some(2),
            ..Default::default()
        };
        let (records, mode) = parse_all(&VALUES, &config).unwrap();
        assert_eq!(mode, ExecutionMode::Parallel);
        assert_eq!(records, parse_sequential(&VALUES));
    }
}
