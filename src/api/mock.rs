use async_trait::async_trait;
use mockall::mock;

use super::{
    ApiResult, GenreReader, ProductReader, ProductWriter, PurchaseReader, PurchaseWriter,
};
use crate::domain::product::Product;
use crate::domain::purchase::{PurchaseDetail, PurchaseRequest};
use crate::domain::search::{ResultPage, SearchParams};

mock! {
    pub ProductReader {}

    #[async_trait]
    impl ProductReader for ProductReader {
        async fn search_products(&self, params: SearchParams) -> ApiResult<ResultPage>;
        async fn get_product(&self, product_code: &str) -> ApiResult<Product>;
    }
}

mock! {
    pub ProductWriter {}

    #[async_trait]
    impl ProductWriter for ProductWriter {
        async fn create_product(&self, product: &Product) -> ApiResult<Product>;
        async fn update_product(&self, product: &Product) -> ApiResult<Product>;
    }
}

mock! {
    pub GenreReader {}

    #[async_trait]
    impl GenreReader for GenreReader {
        async fn list_genres(&self) -> ApiResult<Vec<String>>;
    }
}

mock! {
    pub PurchaseReader {}

    #[async_trait]
    impl PurchaseReader for PurchaseReader {
        async fn get_purchase(&self, product_code: &str) -> ApiResult<PurchaseDetail>;
    }
}

mock! {
    pub PurchaseWriter {}

    #[async_trait]
    impl PurchaseWriter for PurchaseWriter {
        async fn create_purchase(&self, purchase: &PurchaseRequest) -> ApiResult<PurchaseDetail>;
    }
}
