//! Sales wire records.

use jiff::civil::DateTime;
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::sales::models::{Purchase, Sale, SaleLine, SalesOverview};

/// Response body of `GET /venda/listar`.
#[derive(Debug, Clone, Deserialize)]
pub struct SalesOverviewRecord {
    pub compras: Vec<PurchaseRecord>,
    pub vendas: Vec<SaleRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PurchaseRecord {
    pub id: Uuid,
    pub total: Decimal,
    pub data_venda: DateTime,
}

/// One sale group; every line belongs to the same sale.
#[derive(Debug, Clone, Deserialize)]
pub struct SaleRecord {
    pub venda: Vec<SaleLineRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SaleLineRecord {
    pub id: Uuid,
    pub valor_total_da_venda: Decimal,
    pub data_venda: DateTime,
    pub nome_do_livro: String,
    pub quantidade: u32,
}

impl From<SalesOverviewRecord> for SalesOverview {
    fn from(record: SalesOverviewRecord) -> Self {
        Self {
            purchases: record.compras.into_iter().map(Purchase::from).collect(),
            sales: record.vendas.into_iter().map(Sale::from).collect(),
        }
    }
}

impl From<PurchaseRecord> for Purchase {
    fn from(record: PurchaseRecord) -> Self {
        Self {
            id: record.id,
            total: record.total,
            date: record.data_venda,
        }
    }
}

impl From<SaleRecord> for Sale {
    fn from(record: SaleRecord) -> Self {
        Self {
            lines: record.venda.into_iter().map(SaleLine::from).collect(),
        }
    }
}

impl From<SaleLineRecord> for SaleLine {
    fn from(record: SaleLineRecord) -> Self {
        Self {
            sale_id: record.id,
            book_title: record.nome_do_livro,
            quantity: record.quantidade,
            sale_total: record.valor_total_da_venda,
            date: record.data_venda,
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn overview_deserializes_documented_payload() -> TestResult {
        let record: SalesOverviewRecord = serde_json::from_value(serde_json::json!({
            "compras": [
                {
                    "id": "7f8a1c1e-3d45-4a2b-9a01-6a2f6c0a9b11",
                    "total": 159.70,
                    "data_venda": "2026-08-20T15:30:00.123456"
                }
            ],
            "vendas": [
                {
                    "venda": [
                        {
                            "id": "d0a6b1ce-58a3-4b5b-8a4e-19f3f0f2b702",
                            "valor_total_da_venda": 59.90,
                            "data_venda": "2026-08-21T09:00:00",
                            "nome_do_livro": "O Senhor dos Anéis",
                            "quantidade": 1
                        }
                    ]
                }
            ]
        }))?;

        let overview = SalesOverview::from(record);

        assert_eq!(overview.purchases.len(), 1);
        assert_eq!(
            overview.purchases.first().map(|p| p.total),
            Some(Decimal::new(15970, 2))
        );

        let line = overview
            .sales
            .first()
            .and_then(|sale| sale.lines.first())
            .ok_or("expected one sale line")?;

        assert_eq!(line.book_title, "O Senhor dos Anéis");
        assert_eq!(line.quantity, 1);
        assert_eq!(line.date, jiff::civil::datetime(2026, 8, 21, 9, 0, 0, 0));

        Ok(())
    }

    #[test]
    fn overview_tolerates_empty_lists() -> TestResult {
        let record: SalesOverviewRecord =
            serde_json::from_value(serde_json::json!({ "compras": [], "vendas": [] }))?;

        let overview = SalesOverview::from(record);

        assert!(overview.purchases.is_empty());
        assert!(overview.sales.is_empty());

        Ok(())
    }
}
