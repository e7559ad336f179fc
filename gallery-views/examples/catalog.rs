//! Drive both view engines over a small in-memory catalog.

use gallery_views::prelude::*;
use gallery_views::{table, tree};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
struct Product {
    id: String,
    title: String,
    price: u32,
}

fn product(id: &str, title: &str, price: u32) -> Product {
    Product {
        id: id.into(),
        title: title.into(),
        price,
    }
}

fn main() {
    let products = vec![
        product("p1", "Starry Night print", 120),
        product("p2", "Water Lilies poster", 45),
        product("p3", "Sunflowers canvas", 300),
        product("p4", "Haystacks postcard", 5),
        product("p5", "The Kiss giclée", 210),
    ];

    let mut products_table = Table::new(
        vec![
            Column::new("title", "Title", |p: &Product| p.title.clone()).sortable(),
            Column::new("price", "Price", |p: &Product| format!("${}", p.price))
                .sort_by(|p: &Product| SortValue::from(p.price)),
        ],
        |p: &Product| p.id.clone(),
    )
    .search_placeholder("Search products")
    .pagination(Pagination::new(5).options([2, 5]))
    .on_row_click(|p: &Product| println!("-> open {}", p.id));

    products_table.click_header("price");
    products_table.click_header("price");
    if let Err(e) = products_table.set_page_size(2) {
        eprintln!("{e}");
    }
    for line in table::render(&products_table, &products) {
        println!("{line}");
    }
    products_table.click_row(&products, 0);
    println!();

    let categories = vec![
        TreeOption::root("prints", "Prints"),
        TreeOption::child_of("giclee", "Giclée", "prints"),
        TreeOption::child_of("woodblock", "Woodblock", "prints"),
        TreeOption::root("paper", "Paper goods"),
        TreeOption::child_of("posters", "Posters", "paper"),
    ];
    let mut picker = MultiSelect::new(&categories, |next| println!("-> selection {next:?}"))
        .title("Categories")
        .placeholder("Pick categories");

    picker.set_query("post");
    let value = picker.toggle(&[], "posters");
    let value = picker.toggle(&value, "prints");
    for line in tree::render(&picker, &value) {
        println!("{line}");
    }
}
