mod common;

use common::{ingredient_html, recipe_html};
use menu_recipes::{CatalogScraper, Ingredient, RecipeLink, ScrapeError};

fn link(href: &str) -> RecipeLink {
    RecipeLink {
        title: "Хачапури по-аджарски".to_string(),
        href: href.to_string(),
    }
}

fn scraper_for(server: &mockito::Server) -> CatalogScraper {
    CatalogScraper::builder()
        .catalog_url(format!("{}/catalog/gruzinskaya-kuxnya", server.url()))
        .site_origin(server.url())
        .build()
        .unwrap()
}

#[test]
fn test_full_recipe_page() {
    let mut server = mockito::Server::new();
    let ingredients = [
        ingredient_html("Мука пшеничная", "500", "г"),
        ingredient_html("Сыр сулугуни", "300", "г"),
        ingredient_html("Яйца куриные", "3", "шт."),
    ]
    .concat();
    let _m = server
        .mock("GET", "/cooking/12345-hachapuri")
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(recipe_html(&ingredients, Some(" 262 ")))
        .create();

    let recipe = scraper_for(&server)
        .parse_recipe(&link("/cooking/12345-hachapuri"))
        .unwrap();

    assert_eq!(recipe.title, "Хачапури по-аджарски");
    assert_eq!(recipe.url, format!("{}/cooking/12345-hachapuri", server.url()));
    assert_eq!(recipe.calories.as_deref(), Some("262"));
    assert_eq!(
        recipe.ingredients,
        vec![
            Ingredient::new("Мука пшеничная", "500", "г"),
            Ingredient::new("Сыр сулугуни", "300", "г"),
            Ingredient::new("Яйца куриные", "3", "шт."),
        ]
    );
}

#[test]
fn test_missing_unit_selector() {
    let mut server = mockito::Server::new();
    let block = r#"
        <div class="ingredient list-item">
            <a class="name">Соль</a>
            <span class="squant value">по вкусу</span>
        </div>
    "#;
    let _m = server
        .mock("GET", "/cooking/1")
        .with_status(200)
        .with_body(recipe_html(block, Some("100")))
        .create();

    let recipe = scraper_for(&server).parse_recipe(&link("/cooking/1")).unwrap();

    assert_eq!(recipe.ingredients, vec![Ingredient::new("Соль", "по вкусу", "")]);
}

#[test]
fn test_missing_name_keeps_ingredient() {
    let mut server = mockito::Server::new();
    let blocks = [
        r#"
        <div class="ingredient list-item">
            <span class="squant value">2</span>
            <select class="recalc_s_num"><option selected>ст.</option></select>
        </div>
        "#
        .to_string(),
        ingredient_html("Кинза", "1", "пучок"),
    ]
    .concat();
    let _m = server
        .mock("GET", "/cooking/2")
        .with_status(200)
        .with_body(recipe_html(&blocks, None))
        .create();

    let recipe = scraper_for(&server).parse_recipe(&link("/cooking/2")).unwrap();

    assert_eq!(recipe.ingredients.len(), 2);
    assert_eq!(recipe.ingredients[0], Ingredient::new("", "2", "ст."));
    assert_eq!(recipe.ingredients[1].name, "Кинза");
}

#[test]
fn test_empty_block_degrades_to_empty_fields() {
    let mut server = mockito::Server::new();
    let _m = server
        .mock("GET", "/cooking/3")
        .with_status(200)
        .with_body(recipe_html(r#"<div class="ingredient list-item"></div>"#, None))
        .create();

    let recipe = scraper_for(&server).parse_recipe(&link("/cooking/3")).unwrap();
    assert_eq!(recipe.ingredients, vec![Ingredient::default()]);
}

#[test]
fn test_page_without_ingredients_or_calories() {
    let mut server = mockito::Server::new();
    let _m = server
        .mock("GET", "/cooking/4")
        .with_status(200)
        .with_body(recipe_html("<p>Рецепт в разработке</p>", None))
        .create();

    let recipe = scraper_for(&server).parse_recipe(&link("/cooking/4")).unwrap();

    assert!(recipe.ingredients.is_empty());
    assert!(recipe.calories.is_none());
}

#[test]
fn test_single_class_blocks_are_not_ingredients() {
    let mut server = mockito::Server::new();
    let blocks = [
        r#"<div class="ingredient"><a class="name">Заголовок</a></div>"#.to_string(),
        r#"<div class="list-item"><a class="name">Шаг</a></div>"#.to_string(),
        ingredient_html("Грецкие орехи", "200", "г"),
    ]
    .concat();
    let _m = server
        .mock("GET", "/cooking/5")
        .with_status(200)
        .with_body(recipe_html(&blocks, Some("540")))
        .create();

    let recipe = scraper_for(&server).parse_recipe(&link("/cooking/5")).unwrap();
    assert_eq!(
        recipe.ingredients,
        vec![Ingredient::new("Грецкие орехи", "200", "г")]
    );
}

#[test]
fn test_missing_recipe_page() {
    let mut server = mockito::Server::new();
    let _m = server.mock("GET", "/cooking/404").with_status(404).create();

    let result = scraper_for(&server).parse_recipe(&link("/cooking/404"));
    assert!(matches!(
        result,
        Err(ScrapeError::HttpStatus { status: 404, .. })
    ));
}
