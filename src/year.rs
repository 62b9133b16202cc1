use js_sys::Date;
use web_sys::Document;

use folio_core::PageConfig;

pub(crate) fn stamp_year(document: &Document, config: &PageConfig) {
    let Some(target) = document.get_element_by_id(config.selectors.year_id) else {
        return;
    };
    let year = Date::new_0().get_full_year();
    target.set_text_content(Some(&year.to_string()));
}
