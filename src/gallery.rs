use std::rc::Rc;

use js_sys::{Date, Math};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlImageElement};

use crate::reveal::RevealObserver;
use folio_core::gallery::{CARD_CLASS, CARD_META_CLASS, CARD_SUB_CLASS, CARD_TITLE_CLASS};
use folio_core::{build_batch, CardSpec, PageConfig, SeedSource};

/// Browser clock and `Math.random`.
pub(crate) struct BrowserEntropy;

impl SeedSource for BrowserEntropy {
    fn now_ms(&self) -> f64 {
        Date::now()
    }

    fn random_unit(&mut self) -> f64 {
        Math::random()
    }
}

/// Appends `config.batch_size` cards to the gallery in one insertion. Returns
/// the number of cards added; a page without a gallery gets none.
pub(crate) fn load_gallery(
    document: &Document,
    config: &PageConfig,
    reveal: Option<&Rc<RevealObserver>>,
) -> Result<usize, JsValue> {
    let Some(grid) = document.get_element_by_id(config.selectors.gallery_id) else {
        return Ok(0);
    };
    let cards = build_batch(config, &mut BrowserEntropy, config.batch_size);
    let fragment = document.create_document_fragment();
    for card in &cards {
        fragment.append_child(&create_card_element(document, card)?.into())?;
    }
    grid.append_child(&fragment)?;
    if let Some(reveal) = reveal {
        // Cards already on screen get caught on the next frame instead of
        // waiting for the first scroll.
        reveal.attach_next_frame();
    }
    Ok(cards.len())
}

pub(crate) fn create_card_element(document: &Document, card: &CardSpec) -> Result<Element, JsValue> {
    let article = document.create_element("article")?;
    article.set_class_name(CARD_CLASS);
    if card.tiltable {
        article.set_attribute("data-tilt", "")?;
    }
    if card.revealable {
        article.set_attribute("data-reveal", "")?;
    }

    let img = document.create_element("img")?.dyn_into::<HtmlImageElement>()?;
    img.set_src(&card.image_url);
    img.set_alt(card.alt);
    img.set_attribute("loading", "lazy")?;

    let meta = document.create_element("div")?;
    meta.set_class_name(CARD_META_CLASS);

    let title = document.create_element("h4")?;
    title.set_class_name(CARD_TITLE_CLASS);
    title.set_text_content(Some(card.title));

    let sub = document.create_element("p")?;
    sub.set_class_name(CARD_SUB_CLASS);
    sub.set_text_content(Some(card.subtitle));

    meta.append_child(&title)?;
    meta.append_child(&sub)?;
    article.append_child(&img)?;
    article.append_child(&meta)?;
    Ok(article)
}
