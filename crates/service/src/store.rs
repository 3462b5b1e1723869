use std::{path::PathBuf, sync::Arc};

use models::{brand::Brand, order::OrderRequest, product::Product, user::UserRecord};

use crate::errors::ServiceError;
use crate::session::SessionRecord;
use crate::storage::{cell::Cell, collection::Collection};

/// The injected store handle: four collections plus the session record,
/// all living under one data directory. Opened once at startup and passed
/// by reference to every service; tests point it at a temp directory.
pub struct Store {
    pub users: Collection<UserRecord>,
    pub brands: Collection<Brand>,
    pub products: Collection<Product>,
    pub orders: Collection<OrderRequest>,
    pub session: Cell<SessionRecord>,
}

impl Store {
    pub async fn open<P: Into<PathBuf>>(data_dir: P) -> Result<Arc<Self>, ServiceError> {
        let dir = data_dir.into();
        Ok(Arc::new(Self {
            users: Collection::open(dir.join("users.json")).await?,
            brands: Collection::open(dir.join("brands.json")).await?,
            products: Collection::open(dir.join("products.json")).await?,
            orders: Collection::open(dir.join("orders.json")).await?,
            session: Cell::open(dir.join("session.json")).await?,
        }))
    }
}
