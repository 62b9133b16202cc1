use folio_core::PageConfig;

pub(crate) fn load_page_config() -> PageConfig {
    let mut config = PageConfig::default();
    if let Some(host) = option_env!("FOLIO_PLACEHOLDER_HOST")
        .or(option_env!("TRUNK_PUBLIC_FOLIO_PLACEHOLDER_HOST"))
    {
        config = config.with_placeholder_host(host);
    }
    if let Some(batch) =
        option_env!("FOLIO_GALLERY_BATCH").or(option_env!("TRUNK_PUBLIC_FOLIO_GALLERY_BATCH"))
    {
        config = config.with_batch_size(batch);
    }
    config
}
