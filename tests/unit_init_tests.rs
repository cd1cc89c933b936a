//! # Init Command Unit Tests / Init 命令单元测试
//!
//! Tests for the starter presets and the threshold list parser used by the wizard.
//!
//! 测试初始预设以及向导使用的阈值列表解析器。

use fim_bench::commands::init::{Preset, parse_thresholds};
use fim_bench::config::SupportThreshold;

fn setup_i18n() {
    fim_bench::set_language("en");
}

#[test]
fn test_parse_thresholds() {
    setup_i18n();
    let parsed = parse_thresholds("0.5, 1,2%, 7 %").unwrap();
    assert_eq!(
        parsed,
        vec![
            SupportThreshold(0.5),
            SupportThreshold(1.0),
            SupportThreshold(2.0),
            SupportThreshold(7.0)
        ]
    );
}

#[test]
fn test_parse_thresholds_skips_empty_items() {
    setup_i18n();
    assert_eq!(parse_thresholds("3,,5,").unwrap().len(), 2);
}

#[test]
fn test_parse_thresholds_rejects_garbage() {
    setup_i18n();
    let err = parse_thresholds("1, lots").unwrap_err();
    assert!(err.to_string().contains("lots"));
}

#[test]
fn test_presets_are_valid_configs() {
    setup_i18n();
    for preset in [Preset::Times, Preset::Itemsets] {
        let config = preset.config();
        config.validate().unwrap();
        assert_eq!(config.input_paths.len(), 2);
        assert_eq!(config.support_thresholds.len(), 6);
        assert_eq!(config.count_itemsets, preset.counts_itemsets());
    }
}

#[test]
fn test_preset_names() {
    assert_eq!(Preset::from_name("itemsets"), Preset::Itemsets);
    assert_eq!(Preset::from_name("times"), Preset::Times);
    assert_eq!(Preset::from_name("unknown"), Preset::Times);
    assert_eq!(Preset::Times.algorithms(), ["Apriori", "FPGrowth_itemsets", "Eclat"]);
}
