//! Payload mapper unit tests.

#[cfg(test)]
pub(crate) mod tests {
    use checkout_types::{
        Amount, AmountPayload, BillingAddress, BillingAddressPayload, BrandingPayload,
        CardDetailsPayload, CardScheme, CollectionPayload, ConfigPayload, CurrencyCode,
        CustomerPayload, InvalidPayload, ItemLine, ItemLineAmount, ItemLinePayload,
        MerchantConfigPayload, PaymentIntentDomainEntity, PaymentIntentPayload,
        PaymentMethodsPayload, SavedPaymentMethod, SavedPaymentMethodPayload, ShippingDetails,
        SupportedPaymentMethodsPayload, WalletScheme,
    };

    use crate::{PaymentIntentMapper, SupportedPaymentMethodsMapper};

    /// A complete payload that maps cleanly.
    pub fn valid_payload() -> PaymentIntentPayload {
        PaymentIntentPayload {
            id: Some("id".into()),
            capture_mode: Some("captureMode".into()),
            transaction_source: Some("transactionSource".into()),
            client_session_secret: Some("clientSessionSecret".into()),
            client_session_secret_expiration_date: Some("clientSessionSecretExpirationDate".into()),
            status: Some("Created".into()),
            payment_methods: Some(vec!["paymentMethods".into()]),
            total_amount: Some(AmountPayload::new(10, "GBP")),
            customer: Some(CustomerPayload {
                id: Some("id".into()),
                email_address: Some("emailAddress".into()),
            }),
            reference: Some("reference".into()),
            merchant_config: Some(MerchantConfigPayload {
                supported_payment_methods: Some(SupportedPaymentMethodsPayload {
                    card_schemes: Some(vec!["MASTERCARD".into()]),
                    wallets: None,
                }),
            }),
            payment_source: Some("virtual-terminal".into()),
            config: Some(ConfigPayload {
                trading_name: Some("tradingName".into()),
                branding: Some(BrandingPayload {
                    logo_url: Some("logoURL".into()),
                    favicon_url: Some("faviconURL".into()),
                }),
                customer_email: Some(CollectionPayload::required(true)),
                billing_address: Some(CollectionPayload::required(true)),
                shipping_details: Some(CollectionPayload::required(true)),
            }),
            merchant_initiated_transaction_type: Some("merchantInitiatedType".into()),
            item_lines: Some(vec![ItemLinePayload {
                caption: Some("caption".into()),
                amount_total: Some(AmountPayload::new(10, "GBP")),
            }]),
            billing_address: None,
            shipping_details: None,
        }
    }

    /// The entity `valid_payload` maps to.
    pub fn valid_entity() -> PaymentIntentDomainEntity {
        PaymentIntentDomainEntity {
            id: "id".into(),
            payment_token: "clientSessionSecret".into(),
            total_amount: Amount::new(10, CurrencyCode::GBP),
            supported_cards_schemes: vec![CardScheme::Mastercard],
            supported_wallet_schemes: vec![],
            item_lines: vec![ItemLine {
                caption: "caption".into(),
                amount: ItemLineAmount {
                    value: 10,
                    currency_code: CurrencyCode::GBP,
                },
            }],
            customer_id: Some("id".into()),
            collection_email_required: true,
            collection_billing_address_required: true,
            collection_shipping_address_required: true,
            is_pre_auth_payment: false,
            is_set_up_intent_payment: true,
            is_payment_already_collected: false,
            is_virtual_terminal_payment: true,
            order_id: "reference".into(),
            merchant_name: "tradingName".into(),
            customer_email_address: Some("emailAddress".into()),
            billing_address: BillingAddress::default(),
            shipping_details: ShippingDetails::default(),
        }
    }

    fn map(raw: &PaymentIntentPayload) -> Result<PaymentIntentDomainEntity, InvalidPayload> {
        PaymentIntentMapper::new().map_payload(raw)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Payment intent mapping
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_valid_payload_maps_all_fields() {
        assert_eq!(map(&valid_payload()).unwrap(), valid_entity());
    }

    #[test]
    fn test_decimal_amount_string() {
        let entity = map(&valid_payload()).unwrap();
        assert_eq!(entity.total_amount.value_string, "0.10");
    }

    #[test]
    fn test_decimal_amount_follows_currency_exponent() {
        let cases = [
            (10, "JPY", "10"),
            (1234, "KWD", "1.234"),
            (123456, "EUR", "1234.56"),
            (0, "USD", "0.00"),
        ];
        for (value, code, expected) in cases {
            let raw = PaymentIntentPayload {
                total_amount: Some(AmountPayload::new(value, code)),
                ..valid_payload()
            };
            assert_eq!(map(&raw).unwrap().total_amount.value_string, expected);
        }
    }

    #[test]
    fn test_captured_status_is_already_collected() {
        let raw = PaymentIntentPayload {
            status: Some("Captured".into()),
            ..valid_payload()
        };
        let expected = PaymentIntentDomainEntity {
            is_payment_already_collected: true,
            ..valid_entity()
        };
        assert_eq!(map(&raw).unwrap(), expected);
    }

    #[test]
    fn test_authorized_status_is_already_collected() {
        let raw = PaymentIntentPayload {
            status: Some("Authorized".into()),
            ..valid_payload()
        };
        assert!(map(&raw).unwrap().is_payment_already_collected);
    }

    #[test]
    fn test_other_statuses_are_not_collected() {
        for status in [Some("Created"), Some("Refunded"), Some("SomethingNew"), None] {
            let raw = PaymentIntentPayload {
                status: status.map(String::from),
                ..valid_payload()
            };
            let entity = map(&raw).expect("unknown status must not fail mapping");
            assert!(!entity.is_payment_already_collected, "status {:?}", status);
        }
    }

    #[test]
    fn test_invalid_currency_is_rejected() {
        let raw = PaymentIntentPayload {
            total_amount: Some(AmountPayload::new(10, "123")),
            ..valid_payload()
        };
        assert_eq!(
            map(&raw),
            Err(InvalidPayload::UnsupportedCurrency("123".into()))
        );
    }

    #[test]
    fn test_missing_currency_is_rejected() {
        let raw = PaymentIntentPayload {
            total_amount: Some(AmountPayload {
                value: Some(10),
                currency_code: None,
            }),
            ..valid_payload()
        };
        assert!(matches!(
            map(&raw),
            Err(InvalidPayload::UnsupportedCurrency(_))
        ));
    }

    #[test]
    fn test_default_payload_is_rejected() {
        assert!(map(&PaymentIntentPayload::default()).is_err());
    }

    #[test]
    fn test_missing_identity_fields_are_rejected() {
        let no_id = PaymentIntentPayload {
            id: None,
            ..valid_payload()
        };
        assert_eq!(map(&no_id), Err(InvalidPayload::MissingField("id")));

        let blank_token = PaymentIntentPayload {
            client_session_secret: Some("  ".into()),
            ..valid_payload()
        };
        assert_eq!(
            map(&blank_token),
            Err(InvalidPayload::MissingField("clientSessionSecret"))
        );

        let no_amount = PaymentIntentPayload {
            total_amount: None,
            ..valid_payload()
        };
        assert_eq!(
            map(&no_amount),
            Err(InvalidPayload::MissingField("totalAmount"))
        );
    }

    #[test]
    fn test_manual_capture_is_pre_auth() {
        let raw = PaymentIntentPayload {
            capture_mode: Some("Manual".into()),
            ..valid_payload()
        };
        assert!(map(&raw).unwrap().is_pre_auth_payment);
    }

    #[test]
    fn test_capture_mode_match_ignores_case() {
        for mode in ["manual", "MANUAL", "mAnUaL"] {
            let raw = PaymentIntentPayload {
                capture_mode: Some(mode.into()),
                ..valid_payload()
            };
            assert!(map(&raw).unwrap().is_pre_auth_payment, "{mode}");
        }

        let raw = PaymentIntentPayload {
            capture_mode: Some("Auto".into()),
            ..valid_payload()
        };
        assert!(!map(&raw).unwrap().is_pre_auth_payment);
    }

    #[test]
    fn test_without_merchant_initiated_type_is_not_setup_intent() {
        let raw = PaymentIntentPayload {
            merchant_initiated_transaction_type: None,
            ..valid_payload()
        };
        assert!(!map(&raw).unwrap().is_set_up_intent_payment);
    }

    #[test]
    fn test_other_payment_source_is_not_virtual_terminal() {
        let raw = PaymentIntentPayload {
            payment_source: Some("payment-link".into()),
            ..valid_payload()
        };
        assert!(!map(&raw).unwrap().is_virtual_terminal_payment);
    }

    #[test]
    fn test_missing_config_defaults_flags_to_false() {
        let raw = PaymentIntentPayload {
            config: None,
            ..valid_payload()
        };
        let entity = map(&raw).unwrap();
        assert!(!entity.collection_email_required);
        assert!(!entity.collection_billing_address_required);
        assert!(!entity.collection_shipping_address_required);
        assert_eq!(entity.merchant_name, "");
    }

    #[test]
    fn test_unknown_schemes_are_dropped() {
        let raw = PaymentIntentPayload {
            merchant_config: Some(MerchantConfigPayload {
                supported_payment_methods: Some(SupportedPaymentMethodsPayload {
                    card_schemes: Some(vec!["VISA".into(), "DINERS".into(), "AMEX".into()]),
                    wallets: Some(vec!["GOOGLE_PAY".into(), "SAMSUNG_PAY".into()]),
                }),
            }),
            ..valid_payload()
        };
        let entity = map(&raw).unwrap();
        assert_eq!(
            entity.supported_cards_schemes,
            vec![CardScheme::Visa, CardScheme::Amex]
        );
        assert_eq!(entity.supported_wallet_schemes, vec![WalletScheme::GooglePay]);
    }

    #[test]
    fn test_incomplete_item_lines_are_skipped() {
        let raw = PaymentIntentPayload {
            item_lines: Some(vec![
                ItemLinePayload {
                    caption: None,
                    amount_total: Some(AmountPayload::new(10, "GBP")),
                },
                ItemLinePayload {
                    caption: Some("bad currency".into()),
                    amount_total: Some(AmountPayload::new(10, "ZZZ")),
                },
                ItemLinePayload {
                    caption: Some("kept".into()),
                    amount_total: Some(AmountPayload::new(250, "GBP")),
                },
            ]),
            ..valid_payload()
        };
        let entity = map(&raw).unwrap();
        assert_eq!(entity.item_lines.len(), 1);
        assert_eq!(entity.item_lines[0].caption, "kept");
        assert_eq!(entity.item_lines[0].amount.value, 250);
    }

    #[test]
    fn test_addresses_are_carried_over() {
        let raw = PaymentIntentPayload {
            billing_address: Some(BillingAddressPayload {
                postcode: Some("EC1A 1BB".into()),
                country_code: Some("GB".into()),
                city: Some("London".into()),
            }),
            ..valid_payload()
        };
        let entity = map(&raw).unwrap();
        assert_eq!(entity.billing_address.city.as_deref(), Some("London"));
        assert_eq!(entity.shipping_details, ShippingDetails::default());
    }

    #[test]
    fn test_mapping_is_deterministic() {
        let raw = valid_payload();
        assert_eq!(map(&raw), map(&raw));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Saved payment methods mapping
    // ─────────────────────────────────────────────────────────────────────────────

    fn saved(id: &str, scheme: &str) -> SavedPaymentMethodPayload {
        SavedPaymentMethodPayload {
            id: Some(id.into()),
            card_details: Some(CardDetailsPayload {
                pan: Some("****1111".into()),
                expiry_date: Some("12/30".into()),
                scheme: Some(scheme.into()),
            }),
        }
    }

    #[test]
    fn test_saved_methods_map_in_order() {
        let raw = PaymentMethodsPayload {
            saved_payment_methods: Some(vec![saved("pm_1", "VISA"), saved("pm_2", "MAESTRO")]),
            ..Default::default()
        };
        let entity = SupportedPaymentMethodsMapper::new().map(&raw).unwrap();
        assert_eq!(
            entity.items,
            vec![
                SavedPaymentMethod {
                    id: "pm_1".into(),
                    pan: "****1111".into(),
                    expiry_date: "12/30".into(),
                    scheme: CardScheme::Visa,
                },
                SavedPaymentMethod {
                    id: "pm_2".into(),
                    pan: "****1111".into(),
                    expiry_date: "12/30".into(),
                    scheme: CardScheme::Maestro,
                },
            ]
        );
    }

    #[test]
    fn test_unusable_saved_methods_are_skipped() {
        let mut no_pan = saved("pm_3", "VISA");
        no_pan.card_details.as_mut().unwrap().pan = None;
        let raw = PaymentMethodsPayload {
            saved_payment_methods: Some(vec![
                saved("pm_1", "DINERS"),
                saved("", "VISA"),
                no_pan,
                SavedPaymentMethodPayload {
                    id: Some("pm_4".into()),
                    card_details: None,
                },
                saved("pm_5", "AMEX"),
            ]),
            ..Default::default()
        };
        let entity = SupportedPaymentMethodsMapper::new().map(&raw).unwrap();
        assert_eq!(entity.items.len(), 1);
        assert!(entity.find("pm_5").is_some());
    }

    #[test]
    fn test_missing_saved_methods_list_is_rejected() {
        let result = SupportedPaymentMethodsMapper::new().map(&PaymentMethodsPayload::default());
        assert_eq!(
            result,
            Err(InvalidPayload::MissingField("savedPaymentMethods"))
        );
    }

    #[test]
    fn test_empty_saved_methods_list_is_valid() {
        let raw = PaymentMethodsPayload {
            saved_payment_methods: Some(vec![]),
            ..Default::default()
        };
        let entity = SupportedPaymentMethodsMapper::new().map(&raw).unwrap();
        assert!(entity.is_empty());
    }
}
