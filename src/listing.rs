use crate::currencies::RateTable;
use crate::models::{Currency, Product};

/// Outcome of assembling a product listing.
///
/// `Empty` is not an error: the API reports an empty collection as a
/// success-shaped response carrying a message instead of data.
#[derive(Debug, Clone, PartialEq)]
pub enum Listing {
    Products(Vec<Product>),
    Empty,
}

/// Re-denominate every product into `desired` and sort by price ascending.
///
/// The output currency is overwritten even when no conversion was needed,
/// and the sort is stable, so products with equal prices keep their original
/// relative order.
pub fn list_with_currency(
    products: Vec<Product>,
    desired: Currency,
    rates: &RateTable,
) -> Listing {
    if products.is_empty() {
        return Listing::Empty;
    }

    let mut listed: Vec<Product> = products
        .into_iter()
        .map(|mut product| {
            product.price = product.price.converted_to(desired, rates);
            product
        })
        .collect();

    listed.sort_by(|a, b| {
        a.price
            .amount
            .partial_cmp(&b.price.amount)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    Listing::Products(listed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use approx::assert_relative_eq;

    const RATES: RateTable = RateTable {
        eur_to_mkd: 61.63,
        eur_to_usd: 1.10,
    };

    fn product(id: i64, amount: f64, currency: Currency) -> Product {
        Product {
            id,
            name: format!("product-{id}"),
            category: "BLUZI".to_string(),
            quantity: 1,
            size: "M".to_string(),
            price: Money::new(amount, currency),
        }
    }

    #[test]
    fn test_empty_collection_yields_empty() {
        assert_eq!(
            list_with_currency(Vec::new(), Currency::Mkd, &RATES),
            Listing::Empty
        );
    }

    #[test]
    fn test_converts_and_sorts_ascending() {
        let products = vec![
            product(1, 100.0, Currency::Eur),
            product(2, 50.0, Currency::Usd),
        ];

        let Listing::Products(listed) = list_with_currency(products, Currency::Mkd, &RATES) else {
            panic!("expected a non-empty listing");
        };

        // 50 USD is ~2801.36 MKD, which sorts before 100 EUR = 6163 MKD.
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, 2);
        assert_relative_eq!(listed[0].price.amount, 50.0 * 61.63 / 1.10, epsilon = 1e-9);
        assert_eq!(listed[1].id, 1);
        assert_relative_eq!(listed[1].price.amount, 6163.0, epsilon = 1e-9);
        assert!(listed.iter().all(|p| p.price.currency == Currency::Mkd));
    }

    #[test]
    fn test_currency_overwritten_without_conversion() {
        let products = vec![product(1, 250.0, Currency::Mkd)];

        let Listing::Products(listed) = list_with_currency(products, Currency::Mkd, &RATES) else {
            panic!("expected a non-empty listing");
        };

        assert_eq!(listed[0].price, Money::new(250.0, Currency::Mkd));
    }

    #[test]
    fn test_equal_prices_keep_original_order() {
        let products = vec![
            product(7, 100.0, Currency::Eur),
            product(3, 100.0, Currency::Eur),
            product(9, 10.0, Currency::Eur),
        ];

        let Listing::Products(listed) = list_with_currency(products, Currency::Eur, &RATES) else {
            panic!("expected a non-empty listing");
        };

        let ids: Vec<i64> = listed.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![9, 7, 3]);
    }
}
