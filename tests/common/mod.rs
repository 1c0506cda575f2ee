#![allow(dead_code)]

use rand::Rng;
use rand::rngs::StdRng;
use receipt_processor::domain::receipt::{Item, Receipt};

pub fn target_receipt() -> Receipt {
    Receipt {
        retailer: "Target".to_string(),
        purchase_date: "2022-01-01".to_string(),
        purchase_time: "13:01".to_string(),
        items: vec![
            Item::new("Mountain Dew 12PK", "6.49"),
            Item::new("Emils Cheese Pizza", "12.25"),
            Item::new("Knorr Creamy Chicken", "1.26"),
            Item::new("Doritos Nacho Cheese", "3.35"),
            Item::new("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
        ],
        total: "35.35".to_string(),
    }
}

pub fn corner_market_receipt() -> Receipt {
    Receipt {
        retailer: "M&M Corner Market".to_string(),
        purchase_date: "2022-03-20".to_string(),
        purchase_time: "14:33".to_string(),
        items: vec![Item::new("Gatorade", "2.25"); 4],
        total: "9.00".to_string(),
    }
}

fn random_amount(rng: &mut StdRng) -> String {
    format!("{}.{:02}", rng.gen_range(0..500), rng.gen_range(0..100))
}

fn random_text(rng: &mut StdRng, len: usize) -> String {
    const ALPHABET: &[u8] = b"abcXYZ019 &-.'";
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Builds a well-formed receipt with randomised content.
pub fn random_receipt(rng: &mut StdRng) -> Receipt {
    let item_count = rng.gen_range(1..12);
    let items = (0..item_count)
        .map(|_| {
            let len = rng.gen_range(1..30);
            Item::new(format!("x{}", random_text(rng, len)), random_amount(rng))
        })
        .collect();

    let retailer_len = rng.gen_range(1..25);
    Receipt {
        retailer: format!("R{}", random_text(rng, retailer_len)),
        purchase_date: format!(
            "20{:02}-{:02}-{:02}",
            rng.gen_range(0..30),
            rng.gen_range(1..=12),
            rng.gen_range(1..=28)
        ),
        purchase_time: format!("{:02}:{:02}", rng.gen_range(0..24), rng.gen_range(0..60)),
        items,
        total: random_amount(rng),
    }
}

pub fn write_receipt(receipt: &Receipt) -> tempfile::NamedTempFile {
    let file = tempfile::NamedTempFile::new().unwrap();
    serde_json::to_writer(file.as_file(), receipt).unwrap();
    file
}
