pub mod a025_customer_orders;
