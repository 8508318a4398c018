//! Wallet value object - coinage in five denominations.

use serde::{Deserialize, Serialize};

use crate::common::lenient::lenient_u32;

/// Exchange rates in gold pieces per coin.
const PP_VALUE_GP: f64 = 10.0;
const EP_VALUE_GP: f64 = 0.5;
const SP_VALUE_GP: f64 = 0.1;
const CP_VALUE_GP: f64 = 0.01;

/// Coins carried outside of any container.
///
/// Every coin weighs the same regardless of denomination; only the gold-piece
/// value differs. Coin weight is applied by the encumbrance calculator, not
/// here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Wallet {
    #[serde(deserialize_with = "lenient_u32")]
    pub pp: u32,
    #[serde(deserialize_with = "lenient_u32")]
    pub gp: u32,
    #[serde(deserialize_with = "lenient_u32")]
    pub ep: u32,
    #[serde(deserialize_with = "lenient_u32")]
    pub sp: u32,
    #[serde(deserialize_with = "lenient_u32")]
    pub cp: u32,
}

impl Wallet {
    /// Total number of physical coins, all denominations counted alike.
    pub fn total_coins(&self) -> u64 {
        u64::from(self.pp)
            + u64::from(self.gp)
            + u64::from(self.ep)
            + u64::from(self.sp)
            + u64::from(self.cp)
    }

    /// Total purchasing power expressed in gold pieces.
    pub fn value_gp(&self) -> f64 {
        f64::from(self.pp) * PP_VALUE_GP
            + f64::from(self.gp)
            + f64::from(self.ep) * EP_VALUE_GP
            + f64::from(self.sp) * SP_VALUE_GP
            + f64::from(self.cp) * CP_VALUE_GP
    }
}
