use crate::model::config::PaydayConfig;
use anyhow::Result;

pub trait ConfigRepository {
    fn load(&self) -> Result<PaydayConfig>;
}
