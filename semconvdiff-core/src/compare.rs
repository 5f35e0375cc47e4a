use crate::diff::{ConstantChange, diff_constants};
use crate::extract::{ConstantMap, extract_constants};
use semconvdiff_scanner::error::Result;
use semconvdiff_scanner::{SourceConfig, SourceFetcher};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

/// Options for configuring a compare operation
pub struct CompareOptions {
    pub old_version: String,
    pub new_version: String,
    pub source: SourceConfig,
}

/// All constants found for one version label
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VersionConstants {
    pub version: String,
    pub constants: ConstantMap,
}

/// Both sides of a comparison plus the constants whose values changed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comparison {
    pub old: VersionConstants,
    pub new: VersionConstants,
    pub changes: Vec<ConstantChange>,
}

/// Collect the constants of every source file present at `version`.
///
/// Listing and download failures are logged and yield fewer (possibly zero)
/// constants. Only fatal errors, such as a listing that links a file without
/// any path, are returned.
pub async fn fetch_constants_from_version(
    fetcher: &SourceFetcher,
    version: &str,
) -> Result<ConstantMap> {
    let files = match fetcher.fetch_file_names(version).await {
        Ok(files) => files,
        Err(e) if e.is_fatal() => return Err(e),
        Err(e) => {
            error!("Failed to fetch files {}: {}", version, e);
            return Ok(ConstantMap::new());
        }
    };
    info!("{} found files: {:?}", version, files);

    let mut all_constants = ConstantMap::new();
    for file in &files {
        info!(
            "Fetching constants from {}...",
            fetcher.config().raw_file_url(version, file)
        );

        let content = match fetcher.fetch_source_file(version, file).await {
            Ok(content) => content,
            Err(e) => {
                error!("{}", e);
                String::new()
            }
        };

        let constants = extract_constants(&content);
        if constants.is_empty() {
            debug!("{} no constant found on {}", version, file);
        }
        all_constants.extend(constants);
    }

    Ok(all_constants)
}

/// Fetch both versions one after the other and diff them
pub async fn execute_compare(options: CompareOptions) -> Result<Comparison> {
    let CompareOptions {
        old_version,
        new_version,
        source,
    } = options;

    let fetcher = SourceFetcher::new(source)?;

    let old_constants = fetch_constants_from_version(&fetcher, &old_version).await?;
    let new_constants = fetch_constants_from_version(&fetcher, &new_version).await?;

    info!("{} has {} constants", old_version, old_constants.len());
    info!("{} has {} constants", new_version, new_constants.len());

    let changes = diff_constants(&old_constants, &new_constants);

    Ok(Comparison {
        old: VersionConstants {
            version: old_version,
            constants: old_constants,
        },
        new: VersionConstants {
            version: new_version,
            constants: new_constants,
        },
        changes,
    })
}
