//! The decode, group and write pipeline.

use std::fs;
use std::path::PathBuf;

use crate::converter::TextWriter;
use crate::geosite::{self, GeoSiteList};
use crate::group::{self, OutputGroup};
use crate::index::TagIndex;
use crate::selector::Selector;
use crate::{Error, Result, UnpackConfig};

/// One file produced by [`unpack`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenGroup {
    pub label: String,
    pub path: PathBuf,
    pub rule_count: usize,
}

/// Unpack the geosite file named by `config`.
///
/// With filters, one file is written per filter in the given order and the
/// run stops at the first unknown tag. Without filters, every tag is split
/// by attribute and each group is written.
pub fn unpack(config: &UnpackConfig) -> Result<Vec<WrittenGroup>> {
    config.validate()?;
    let list = geosite::load(&config.source)?;
    unpack_list(&list, config)
}

/// Run the pipeline on an already decoded list.
///
/// `config.source` is only used to name output files.
pub fn unpack_list(list: &GeoSiteList, config: &UnpackConfig) -> Result<Vec<WrittenGroup>> {
    let index = TagIndex::build(list);
    prepare_out_dir(config)?;

    let mut written = Vec::new();
    if config.filters.is_empty() {
        for group in group::auto_groups(&index) {
            written.push(save(config, &group)?);
        }
    } else {
        for filter in &config.filters {
            let group = group::resolve(&index, &Selector::parse(filter))?;
            written.push(save(config, &group)?);
        }
    }
    Ok(written)
}

fn prepare_out_dir(config: &UnpackConfig) -> Result<()> {
    match &config.out_dir {
        Some(dir) if config.create_out_dir && !dir.as_os_str().is_empty() => {
            fs::create_dir_all(dir)?;
            Ok(())
        }
        _ => Ok(()),
    }
}

fn save(config: &UnpackConfig, group: &OutputGroup<'_>) -> Result<WrittenGroup> {
    let path = config.output_path(&group.label);
    log::info!(
        "unpacking entry tag={} length={} file={}",
        group.label,
        group.len(),
        path.display()
    );
    TextWriter::write_file(&group.rules, &path).map_err(|e| Error::saving(&group.label, e))?;
    Ok(WrittenGroup {
        label: group.label.clone(),
        path,
        rule_count: group.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geosite::{Domain, GeoSite};
    use crate::MatchType;

    #[test]
    fn test_invalid_rule_type_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut bad = Domain::new(MatchType::Full, "bad.example");
        bad.r#type = 99;
        let list = GeoSiteList {
            entry: vec![GeoSite::new(
                "cn",
                vec![Domain::new(MatchType::Domain, "ok.example"), bad],
            )],
        };
        let config = UnpackConfig::new("geosite.dat")
            .with_out_dir(dir.path())
            .with_filters(["cn"]);

        let err = unpack_list(&list, &config).unwrap_err();
        assert!(matches!(err.root(), Error::InvalidRuleType(99)));
        assert!(err.to_string().contains("cn"));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_creates_nested_out_dir() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("a").join("b");
        let list = GeoSiteList {
            entry: vec![GeoSite::new(
                "cn",
                vec![Domain::new(MatchType::Domain, "example.com")],
            )],
        };
        let config = UnpackConfig::new("geosite.dat").with_out_dir(&out);

        let written = unpack_list(&list, &config).unwrap();
        assert_eq!(written.len(), 1);
        assert_eq!(written[0].path, out.join("geosite_cn.txt"));
        assert!(written[0].path.exists());
    }
}
