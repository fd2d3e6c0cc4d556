#![allow(dead_code)]

use menu_recipes::{Fetcher, Pacer, ScrapeError};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

/// Catalog page with `count` recipe anchors plus unrelated links around them
pub fn catalog_html(count: usize) -> String {
    let anchors = (0..count)
        .map(|i| {
            format!(
                r#"<div class="cn-item"><a class="h5" href="/cooking/{i}-recept">Рецепт {i}</a></div>"#
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"
        <!DOCTYPE html>
        <html>
        <head><title>Грузинская кухня</title></head>
        <body>
            <a class="logo" href="/">1000.menu</a>
            <section class="cn-list">
                {anchors}
            </section>
            <a class="h4" href="/catalog/armyanskaya-kuxnya">Армянская кухня</a>
        </body>
        </html>
        "#
    )
}

/// One complete ingredient block
pub fn ingredient_html(name: &str, value: &str, unit: &str) -> String {
    format!(
        r#"
        <div class="ingredient list-item">
            <a class="name" href="/ingredient/x">{name}</a>
            <span class="squant value">{value}</span>
            <select class="recalc_s_num">
                <option value="0">ст.</option>
                <option value="1" selected="selected">{unit}</option>
            </select>
        </div>
        "#
    )
}

/// Recipe page wrapping the given ingredient blocks
pub fn recipe_html(ingredients: &str, calories: Option<&str>) -> String {
    let calories = calories
        .map(|kcal| format!(r#"<div class="nutrition"><span id="nutr_kcal">{kcal}</span> ккал</div>"#))
        .unwrap_or_default();

    format!(
        r#"
        <!DOCTYPE html>
        <html>
        <body>
            <h1>Рецепт</h1>
            <div class="ingredients-list">
                {ingredients}
            </div>
            {calories}
        </body>
        </html>
        "#
    )
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Get(String),
    Pause(Duration),
}

pub type EventLog = Rc<RefCell<Vec<Event>>>;

/// Serves pages from memory and answers 404 for anything else
pub struct CannedFetcher {
    pages: HashMap<String, String>,
    log: EventLog,
}

impl CannedFetcher {
    pub fn new(log: EventLog) -> Self {
        Self {
            pages: HashMap::new(),
            log,
        }
    }

    pub fn page(mut self, url: impl Into<String>, html: impl Into<String>) -> Self {
        self.pages.insert(url.into(), html.into());
        self
    }
}

impl Fetcher for CannedFetcher {
    fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        self.log.borrow_mut().push(Event::Get(url.to_string()));
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| ScrapeError::HttpStatus {
                url: url.to_string(),
                status: 404,
            })
    }
}

/// Records pauses instead of sleeping
pub struct RecordingPacer {
    log: EventLog,
}

impl RecordingPacer {
    pub fn new(log: EventLog) -> Self {
        Self { log }
    }
}

impl Pacer for RecordingPacer {
    fn pause(&mut self, delay: Duration) {
        self.log.borrow_mut().push(Event::Pause(delay));
    }
}
