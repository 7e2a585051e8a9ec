use alloy_primitives::{hex, keccak256};

/// Compute the Solidity function selector (first 4 bytes of keccak256(signature)).
pub fn function_selector(signature: &str) -> [u8; 4] {
    let hash = keccak256(signature.as_bytes());
    let mut selector = [0u8; 4];
    selector.copy_from_slice(&hash[..4]);
    selector
}

/// Every externally callable token operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Name,
    Symbol,
    Decimals,
    TotalSupply,
    BalanceOf,
    Transfer,
    Mint,
    Init,
    AddMinter,
    RemoveMinter,
    Minters,
    MintersCurrent,
    MintersEntries,
    MinterIdx,
}

impl Method {
    pub const ALL: [Method; 14] = [
        Method::Name,
        Method::Symbol,
        Method::Decimals,
        Method::TotalSupply,
        Method::BalanceOf,
        Method::Transfer,
        Method::Mint,
        Method::Init,
        Method::AddMinter,
        Method::RemoveMinter,
        Method::Minters,
        Method::MintersCurrent,
        Method::MintersEntries,
        Method::MinterIdx,
    ];

    /// Canonical ABI signature.
    pub fn signature(self) -> &'static str {
        match self {
            Method::Name => "name()",
            Method::Symbol => "symbol()",
            Method::Decimals => "decimals()",
            Method::TotalSupply => "totalSupply()",
            Method::BalanceOf => "balanceOf(address)",
            Method::Transfer => "transfer(address,uint256)",
            Method::Mint => "mint(address,uint256)",
            Method::Init => "init(address)",
            Method::AddMinter => "add_minter(address)",
            Method::RemoveMinter => "remove_minter(address)",
            Method::Minters => "minters(uint256)",
            Method::MintersCurrent => "minters_current()",
            Method::MintersEntries => "minters_entries()",
            Method::MinterIdx => "minter_idx(address)",
        }
    }

    /// Name used in diagnostics.
    pub fn op_name(self) -> &'static str {
        let signature = self.signature();
        match signature.find('(') {
            Some(end) => &signature[..end],
            None => signature,
        }
    }

    /// Selector of [`Self::signature`], precomputed.
    pub const fn selector(self) -> [u8; 4] {
        match self {
            Method::Name => hex!("06fdde03"),
            Method::Symbol => hex!("95d89b41"),
            Method::Decimals => hex!("313ce567"),
            Method::TotalSupply => hex!("18160ddd"),
            Method::BalanceOf => hex!("70a08231"),
            Method::Transfer => hex!("a9059cbb"),
            Method::Mint => hex!("40c10f19"),
            Method::Init => hex!("19ab453c"),
            Method::AddMinter => hex!("3052a8db"),
            Method::RemoveMinter => hex!("5eed499c"),
            Method::Minters => hex!("8623ec7b"),
            Method::MintersCurrent => hex!("9026abd9"),
            Method::MintersEntries => hex!("61e51e6b"),
            Method::MinterIdx => hex!("1fafd177"),
        }
    }

    pub fn from_selector(selector: [u8; 4]) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.selector() == selector)
    }

    /// Number of 32-byte argument words the method takes.
    pub fn arg_words(self) -> usize {
        match self {
            Method::Transfer | Method::Mint => 2,
            Method::BalanceOf
            | Method::Init
            | Method::AddMinter
            | Method::RemoveMinter
            | Method::Minters
            | Method::MinterIdx => 1,
            Method::Name
            | Method::Symbol
            | Method::Decimals
            | Method::TotalSupply
            | Method::MintersCurrent
            | Method::MintersEntries => 0,
        }
    }

    /// Whether the method only reads storage.
    pub fn is_view(self) -> bool {
        !matches!(
            self,
            Method::Transfer | Method::Mint | Method::Init | Method::AddMinter | Method::RemoveMinter
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_erc20_selectors() {
        assert_eq!(Method::Name.selector(), hex!("06fdde03"));
        assert_eq!(Method::Symbol.selector(), hex!("95d89b41"));
        assert_eq!(Method::Decimals.selector(), hex!("313ce567"));
        assert_eq!(Method::TotalSupply.selector(), hex!("18160ddd"));
        assert_eq!(Method::BalanceOf.selector(), hex!("70a08231"));
        assert_eq!(Method::Transfer.selector(), hex!("a9059cbb"));
        assert_eq!(Method::Mint.selector(), hex!("40c10f19"));
    }

    #[test]
    fn test_registry_selectors() {
        assert_eq!(Method::Init.selector(), hex!("19ab453c"));
        assert_eq!(Method::AddMinter.selector(), hex!("3052a8db"));
        assert_eq!(Method::RemoveMinter.selector(), hex!("5eed499c"));
        assert_eq!(Method::Minters.selector(), hex!("8623ec7b"));
        assert_eq!(Method::MintersCurrent.selector(), hex!("9026abd9"));
        assert_eq!(Method::MintersEntries.selector(), hex!("61e51e6b"));
        assert_eq!(Method::MinterIdx.selector(), hex!("1fafd177"));
    }

    #[test]
    fn test_selector_table_matches_signatures() {
        for method in Method::ALL {
            assert_eq!(
                method.selector(),
                function_selector(method.signature()),
                "{method:?}"
            );
        }
    }

    #[test]
    fn test_all_selectors_distinct_and_resolvable() {
        for (i, a) in Method::ALL.iter().enumerate() {
            assert_eq!(Method::from_selector(a.selector()), Some(*a));
            for b in Method::ALL.iter().skip(i + 1) {
                assert_ne!(a.selector(), b.selector(), "{a:?} and {b:?} collide");
            }
        }
        assert_eq!(Method::from_selector([0xde, 0xad, 0xbe, 0xef]), None);
    }

    #[test]
    fn test_op_names() {
        assert_eq!(Method::Transfer.op_name(), "transfer");
        assert_eq!(Method::MintersCurrent.op_name(), "minters_current");
    }

    #[test]
    fn test_views() {
        assert!(Method::BalanceOf.is_view());
        assert!(Method::Minters.is_view());
        assert!(!Method::Transfer.is_view());
        assert!(!Method::Init.is_view());
    }
}
