//! Tests for product model validation.

#[cfg(test)]
mod tests {
    use crate::products::NewProduct;
    use rust_decimal_macros::dec;

    fn valid_product() -> NewProduct {
        NewProduct {
            description: "Blue Shirt".to_string(),
            price: dec!(49.90),
            barcode: "7891234567895".to_string(),
        }
    }

    #[test]
    fn valid_product_passes() {
        assert!(valid_product().validate().is_ok());
    }

    #[test]
    fn empty_description_is_rejected() {
        let mut product = valid_product();
        product.description = "   ".to_string();
        assert!(product.validate().is_err());
    }

    #[test]
    fn non_positive_price_is_rejected() {
        let mut product = valid_product();
        product.price = dec!(0);
        assert!(product.validate().is_err());
        product.price = dec!(-1.50);
        assert!(product.validate().is_err());
    }

    #[test]
    fn empty_barcode_is_rejected() {
        let mut product = valid_product();
        product.barcode = String::new();
        assert!(product.validate().is_err());
    }

    #[test]
    fn barcode_at_limit_passes_and_over_limit_fails() {
        let mut product = valid_product();
        product.barcode = "1".repeat(13);
        assert!(product.validate().is_ok());
        product.barcode = "1".repeat(14);
        assert!(product.validate().is_err());
    }
}
