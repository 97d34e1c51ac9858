//! Reference catalog and ledger used to seed the demo system.

use chrono::NaiveDate;

use crate::domain::{Invoice, InvoiceId, InvoiceStatus, Product};

pub fn products() -> Vec<Product> {
    vec![
        Product::new(1, "Laptop", "Electronics", 10, 15_000_000.0, "High-performance laptop"),
        Product::new(2, "Smartphone", "Electronics", 20, 5_000_000.0, "Latest smartphone model"),
        Product::new(3, "T-shirt", "Clothing", 50, 150_000.0, "Cotton t-shirt"),
        Product::new(4, "Jeans", "Clothing", 30, 300_000.0, "Denim jeans"),
        Product::new(5, "Headphones", "Electronics", 15, 500_000.0, "Wireless headphones"),
        Product::new(6, "Watch", "Accessories", 25, 1_000_000.0, "Luxury watch"),
        Product::new(7, "Sneakers", "Footwear", 40, 800_000.0, "Sports sneakers"),
        Product::new(8, "Backpack", "Accessories", 35, 400_000.0, "Travel backpack"),
        Product::new(9, "Keyboard", "Electronics", 20, 350_000.0, "Mechanical keyboard"),
        Product::new(10, "Mouse", "Electronics", 25, 200_000.0, "Wireless mouse"),
    ]
}

pub fn invoices() -> Vec<Invoice> {
    let catalog = products();
    let snapshot = |positions: &[usize]| -> Vec<Product> {
        positions.iter().filter_map(|&i| catalog.get(i).cloned()).collect()
    };

    vec![
        Invoice {
            id: InvoiceId(1),
            order_number: "ORD-001".into(),
            customer_name: "John Doe".into(),
            date: date(2023, 5, 15),
            items: snapshot(&[0, 4]),
            total_amount: 15_500_000.0,
            custom_price: Some(15_000_000.0),
            status: InvoiceStatus::Paid,
        },
        Invoice {
            id: InvoiceId(2),
            order_number: "ORD-002".into(),
            customer_name: "Jane Smith".into(),
            date: date(2023, 5, 16),
            items: snapshot(&[1, 5]),
            total_amount: 6_000_000.0,
            custom_price: Some(5_800_000.0),
            status: InvoiceStatus::Pending,
        },
        Invoice {
            id: InvoiceId(3),
            order_number: "ORD-003".into(),
            customer_name: "Bob Johnson".into(),
            date: date(2023, 5, 17),
            items: snapshot(&[2, 3, 6]),
            total_amount: 1_250_000.0,
            custom_price: None,
            status: InvoiceStatus::Paid,
        },
    ]
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fixture dates are valid calendar dates")
}
