//! Response models for the resources the aggregation service owns.
//!
//! The remote service is the source of truth for every entity here; this
//! client never manages their lifecycle. Fields are deliberately tolerant
//! (`Option` everywhere the service may omit a value) and list responses
//! mirror the service's `{resource_plural: [...], total}` envelopes.

mod account;
mod category;
mod connection;
mod connector;
mod platform;
mod transaction;

pub use account::{Account, AccountType, AccountTypesList, AccountsList};
pub use category::{CategoriesList, CategorizedTransaction, Category};
pub use connection::{Connection, ConnectionsList};
pub use connector::{
    BanksList, Connector, ConnectorField, ConnectorLogo, ConnectorsList, LogosList,
};
pub use platform::{Invoicing, Log, LogsList};
pub use transaction::{
    ClustersList, Transaction, TransactionInformation, TransactionInformationsList,
    TransactionsCluster, TransactionsList,
};
