pub mod checkout_reconciliation;
