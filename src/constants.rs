//! Embedded Datasets
//!
//! The two datasets below are compiled into the binary; there is no runtime
//! data acquisition. Both share the same set of 20 altcoin names.
//!
//! ## Market dataset (Binance snapshot)
//!
//! | Column    | Type | Unit               |
//! |-----------|------|--------------------|
//! | Altcoin   | text | asset name         |
//! | Price     | f64  | USD                |
//! | Volume    | f64  | USD, 24h           |
//! | MarketCap | f64  | USD                |
//! | Change    | f64  | percent, 24h, signed |
//!
//! ## Activity dataset (GitHub snapshot)
//!
//! | Column        | Type | Unit                   |
//! |---------------|------|------------------------|
//! | Altcoin       | text | asset name             |
//! | Commits       | f64  | count, last month      |
//! | OpenIssues    | f64  | count                  |
//! | PullRequests  | f64  | count, last month      |
//! | ActivityScore | f64  | community scale 1-10   |

/// Altcoin market metrics, one row per asset.
pub const MARKET_CSV: &str = "\
Altcoin,Price,Volume,MarketCap,Change
Aergo (AERGO),0.12,5000000,60000000,2.5
Aion (AION),0.08,3000000,40000000,-1.2
Bluzelle (BLZ),0.05,2000000,25000000,0.8
Celer Network (CELR),0.03,1500000,18000000,1.5
COTI (COTI),0.04,1000000,20000000,-0.5
Elrond (EGLD),50,8000000,2500000000,3.2
Fetch.ai (FET),0.25,6000000,125000000,1.8
Harmony (ONE),0.02,4000000,10000000,-0.9
Hedera Hashgraph (HBAR),0.06,2500000,30000000,0.7
ICON (ICX),0.30,7000000,150000000,2.1
IOST (IOST),0.01,1800000,50000000,-1.5
Kava (KAVA),0.80,3500000,400000000,0.5
Komodo (KMD),0.55,1500000,275000000,-0.2
Kyber Network (KNC),0.70,1000000,350000000,3.0
Nervos Network (CKB),0.008,8000000,40000000,-0.7
Ocean Protocol (OCEAN),0.45,1200000,225000000,1.8
Ontology (ONT),0.50,2000000,250000000,1.2
Quant (QNT),100,4000000,5000000000,-1.5
Ravencoin (RVN),0.035,3000000,175000000,2.1
Reserve (RSV),0.02,1500000,10000000,0.5";

/// Repository activity metrics, one row per asset.
pub const ACTIVITY_CSV: &str = "\
Altcoin,Commits,OpenIssues,PullRequests,ActivityScore
Aergo (AERGO),180,30,60,7.5
Aion (AION),150,25,50,6.8
Bluzelle (BLZ),120,20,40,6.2
Celer Network (CELR),190,32,65,7.8
COTI (COTI),160,28,55,7.2
Elrond (EGLD),250,40,80,8.5
Fetch.ai (FET),220,35,70,8.2
Harmony (ONE),170,30,58,7.5
Hedera Hashgraph (HBAR),200,38,75,8.0
ICON (ICX),230,35,75,8.3
IOST (IOST),140,22,45,6.5
Kava (KAVA),210,35,70,8.0
Komodo (KMD),165,28,55,7.3
Kyber Network (KNC),240,40,80,8.7
Nervos Network (CKB),185,32,62,7.8
Ocean Protocol (OCEAN),205,35,70,8.2
Ontology (ONT),195,33,68,7.9
Quant (QNT),260,45,90,9.0
Ravencoin (RVN),175,30,60,7.6
Reserve (RSV),155,25,50,7.0";

/// Column names for the market dataset.
pub mod market_col {
    pub const ALTCOIN: &str = "Altcoin";
    pub const PRICE: &str = "Price";
    pub const VOLUME: &str = "Volume";
    pub const MARKET_CAP: &str = "MarketCap";
    pub const CHANGE: &str = "Change";
}

/// Column names for the activity dataset.
pub mod activity_col {
    pub const ALTCOIN: &str = "Altcoin";
    pub const COMMITS: &str = "Commits";
    pub const OPEN_ISSUES: &str = "OpenIssues";
    pub const PULL_REQUESTS: &str = "PullRequests";
    pub const ACTIVITY_SCORE: &str = "ActivityScore";
}
