//! Shared fixture for storequery integration tests
//!
//! A small trading dataset:
//! - nine customers, two of them without orders (THEBI, PARIS)
//! - ten products in four categories
//! - eight suppliers, one sharing a city name but not a country

#![allow(dead_code)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use storequery::{Customer, DataStore, Order, Product, Supplier};

// =============================================================================
// Helper Functions
// =============================================================================

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn money(value: &str) -> Decimal {
    value.parse().unwrap()
}

pub fn order(id: u32, y: i32, m: u32, d: u32, total: &str) -> Order {
    Order::new(id, date(y, m, d), money(total))
}

pub fn ids<T>(rows: &[T], id: impl Fn(&T) -> &str) -> Vec<String> {
    rows.iter().map(|r| id(r).to_string()).collect()
}

// =============================================================================
// Fixture
// =============================================================================

pub fn customers() -> Vec<Customer> {
    vec![
        Customer::new("ALFKI", "Germany", "Berlin")
            .with_region("BE")
            .with_postal_code("12209")
            .with_phone("030-0074321")
            .with_orders([
                order(10643, 2019, 8, 25, "814.50"),
                order(10692, 2019, 10, 3, "878.00"),
                order(10702, 2019, 10, 13, "330.00"),
            ]),
        Customer::new("ANATR", "Mexico", "México D.F.")
            .with_postal_code("05021")
            .with_phone("(5) 555-4729")
            .with_orders([
                order(10308, 2018, 9, 18, "88.80"),
                order(10625, 2019, 8, 8, "479.75"),
            ]),
        Customer::new("AROUT", "UK", "London")
            .with_postal_code("WA1 1DP")
            .with_phone("(171) 555-7788")
            .with_orders([
                order(10355, 2018, 11, 15, "480.00"),
                order(10383, 2018, 12, 16, "899.00"),
                order(10453, 2019, 2, 21, "407.70"),
            ]),
        Customer::new("BERGS", "Sweden", "Luleå")
            .with_postal_code("S-958 22")
            .with_phone("0921-12 34 65")
            .with_orders([
                order(10278, 2018, 8, 12, "1488.80"),
                order(10280, 2018, 8, 14, "613.20"),
                order(10384, 2018, 12, 16, "2222.40"),
            ]),
        Customer::new("BSBEV", "UK", "London")
            .with_postal_code("EC2 5NT")
            .with_phone("(171) 555-1212")
            .with_orders([order(10289, 2018, 8, 26, "479.40")]),
        Customer::new("QUICK", "Germany", "Cunewalde")
            .with_postal_code("01307")
            .with_phone("0372-035188")
            .with_orders([
                order(10273, 2018, 8, 5, "2037.28"),
                order(10285, 2018, 8, 20, "1743.36"),
                order(10286, 2018, 8, 21, "3016.00"),
                order(10865, 2020, 2, 2, "16387.50"),
            ]),
        Customer::new("LONEP", "USA", "Portland")
            .with_region("OR")
            .with_postal_code("97219")
            .with_phone("(503) 555-9573")
            .with_orders([
                order(10307, 2018, 9, 17, "424.00"),
                order(10317, 2018, 9, 30, "288.00"),
            ]),
        Customer::new("THEBI", "USA", "Portland")
            .with_region("OR")
            .with_postal_code("97201")
            .with_phone("(503) 555-3612"),
        Customer::new("PARIS", "France", "Paris")
            .with_region("")
            .with_postal_code("75012")
            .with_phone("(1) 42.34.22.66"),
    ]
}

pub fn products() -> Vec<Product> {
    vec![
        Product::new("Chai", "Beverages", money("18.00"), 39),
        Product::new("Chang", "Beverages", money("19.00"), 17),
        Product::new("Aniseed Syrup", "Condiments", money("10.00"), 13),
        Product::new("Chef Anton's Gumbo Mix", "Condiments", money("21.35"), 0),
        Product::new("Grandma's Boysenberry Spread", "Condiments", money("25.00"), 120),
        Product::new("Mishi Kobe Niku", "Meat/Poultry", money("97.00"), 29),
        Product::new("Alice Mutton", "Meat/Poultry", money("39.00"), 0),
        Product::new("Guaraná Fantástica", "Beverages", money("4.50"), 20),
        Product::new("Côte de Blaye", "Beverages", money("263.50"), 17),
        Product::new("Ikura", "Seafood", money("31.00"), 31),
    ]
}

pub fn suppliers() -> Vec<Supplier> {
    vec![
        Supplier::new("Exotic Liquids", "UK", "London"),
        Supplier::new("Heli Süßwaren", "Germany", "Berlin"),
        Supplier::new("New England Seafood", "USA", "Boston"),
        Supplier::new("Bigfoot Breweries", "USA", "Portland"),
        Supplier::new("Specialty Biscuits", "UK", "London"),
        Supplier::new("Aux joyeux ecclésiastiques", "France", "Paris"),
        Supplier::new("Svensk Sjöföda", "Sweden", "Stockholm"),
        Supplier::new("Forêts d'érables", "Canada", "London"),
    ]
}

pub fn store() -> DataStore {
    DataStore::new(customers(), products(), suppliers()).unwrap()
}

/// Customers A with orders of 100 and 200, B without orders
pub fn two_customer_store() -> DataStore {
    let customers = vec![
        Customer::new("A", "DE", "Berlin").with_orders([
            order(1, 2020, 3, 1, "100"),
            order(2, 2020, 5, 1, "200"),
        ]),
        Customer::new("B", "DE", "Berlin"),
    ];
    DataStore::new(customers, Vec::new(), Vec::new()).unwrap()
}

pub fn product_store(prices: &[&str]) -> DataStore {
    let products = prices
        .iter()
        .enumerate()
        .map(|(i, price)| Product::new(format!("P{}", i), "Misc", money(price), 1))
        .collect();
    DataStore::new(Vec::new(), products, Vec::new()).unwrap()
}
