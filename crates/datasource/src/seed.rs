//! The product's demo datasets.
//!
//! Every collection the dashboard shows is seeded locally; the datasets
//! live here as embedded JSON and decode into the record-kind crates'
//! types. Ids are fixed so demo data is stable across runs.

use anyhow::Context;
use serde::de::DeserializeOwned;

use stockcast_alerts::Alert;
use stockcast_forecasts::Forecast;
use stockcast_inventory::InventoryItem;
use stockcast_purchasing::PurchaseOrder;
use stockcast_reports::Report;
use stockcast_team::TeamMember;

use crate::source::SourceError;

fn decode<T: DeserializeOwned>(label: &str, json: &str) -> Result<Vec<T>, SourceError> {
    serde_json::from_str(json)
        .with_context(|| format!("failed to decode embedded {label} dataset"))
        .map_err(|err| SourceError::Seed(format!("{err:#}")))
}

pub fn inventory_items() -> Result<Vec<InventoryItem>, SourceError> {
    decode("inventory", INVENTORY)
}

pub fn forecasts() -> Result<Vec<Forecast>, SourceError> {
    decode("forecasts", FORECASTS)
}

pub fn purchase_orders() -> Result<Vec<PurchaseOrder>, SourceError> {
    decode("purchase orders", PURCHASE_ORDERS)
}

pub fn alerts() -> Result<Vec<Alert>, SourceError> {
    decode("alerts", ALERTS)
}

pub fn reports() -> Result<Vec<Report>, SourceError> {
    decode("reports", REPORTS)
}

pub fn team_members() -> Result<Vec<TeamMember>, SourceError> {
    decode("team", TEAM)
}

const INVENTORY: &str = r#"[
  {
    "id": "018f5a00-0000-7000-8000-000000000001",
    "sku": "TECH-001",
    "name": "Wireless Earbuds Pro",
    "category": "electronics",
    "warehouse": "central",
    "status": "in_stock",
    "current_stock": 145,
    "reorder_point": 40,
    "unit_cost": 24.5,
    "days_of_stock": 36.0,
    "last_updated": "2024-06-03T09:15:00Z"
  },
  {
    "id": "018f5a00-0000-7000-8000-000000000002",
    "sku": "TECH-014",
    "name": "USB-C Travel Hub",
    "category": "electronics",
    "warehouse": "central",
    "status": "low_stock",
    "current_stock": 12,
    "reorder_point": 25,
    "unit_cost": 31.0,
    "days_of_stock": 6.5,
    "last_updated": "2024-06-03T07:40:00Z"
  },
  {
    "id": "018f5a00-0000-7000-8000-000000000003",
    "sku": "FASH-002",
    "name": "Canvas Tote Bag",
    "category": "fashion",
    "warehouse": "east",
    "status": "in_stock",
    "current_stock": 340,
    "reorder_point": 80,
    "unit_cost": 9.25,
    "days_of_stock": 52.0,
    "last_updated": "2024-06-02T18:05:00Z"
  },
  {
    "id": "018f5a00-0000-7000-8000-000000000004",
    "sku": "HOME-007",
    "name": "Adjustable Desk Lamp",
    "category": "home",
    "warehouse": "central",
    "status": "out_of_stock",
    "current_stock": 0,
    "reorder_point": 30,
    "unit_cost": 18.0,
    "days_of_stock": 0.0,
    "last_updated": "2024-06-01T12:00:00Z"
  },
  {
    "id": "018f5a00-0000-7000-8000-000000000005",
    "sku": "HOME-011",
    "name": "Stoneware Mug Set",
    "category": "home",
    "warehouse": "east",
    "status": "overstock",
    "current_stock": 920,
    "reorder_point": 60,
    "unit_cost": 6.5,
    "days_of_stock": 140.0,
    "last_updated": "2024-05-30T10:30:00Z"
  },
  {
    "id": "018f5a00-0000-7000-8000-000000000006",
    "sku": "FASH-020",
    "name": "Merino Wool Scarf",
    "category": "fashion",
    "warehouse": "east",
    "status": "in_stock",
    "current_stock": 75,
    "reorder_point": 20,
    "unit_cost": 14.0,
    "days_of_stock": 28.0,
    "last_updated": "2024-06-03T08:10:00Z"
  }
]"#;

const FORECASTS: &str = r#"[
  {
    "id": "018f5a01-0000-7000-8000-000000000001",
    "sku": "TECH-014",
    "product_name": "USB-C Travel Hub",
    "trend": "rising",
    "confidence": "high",
    "accuracy": 93.4,
    "predicted_demand": 260,
    "days_to_depletion": 6,
    "suggested_reorder_qty": 180,
    "generated_at": "2024-06-03T05:30:00Z"
  },
  {
    "id": "018f5a01-0000-7000-8000-000000000002",
    "sku": "TECH-001",
    "product_name": "Wireless Earbuds Pro",
    "trend": "stable",
    "confidence": "high",
    "accuracy": 91.2,
    "predicted_demand": 310,
    "days_to_depletion": 34,
    "suggested_reorder_qty": 120,
    "generated_at": "2024-06-03T05:30:00Z"
  },
  {
    "id": "018f5a01-0000-7000-8000-000000000003",
    "sku": "HOME-007",
    "product_name": "Adjustable Desk Lamp",
    "trend": "rising",
    "confidence": "medium",
    "accuracy": 84.7,
    "predicted_demand": 150,
    "days_to_depletion": 0,
    "suggested_reorder_qty": 90,
    "generated_at": "2024-06-03T05:30:00Z"
  },
  {
    "id": "018f5a01-0000-7000-8000-000000000004",
    "sku": "HOME-011",
    "product_name": "Stoneware Mug Set",
    "trend": "declining",
    "confidence": "medium",
    "accuracy": 78.9,
    "predicted_demand": 60,
    "days_to_depletion": null,
    "suggested_reorder_qty": 0,
    "generated_at": "2024-06-03T05:30:00Z"
  },
  {
    "id": "018f5a01-0000-7000-8000-000000000005",
    "sku": "FASH-002",
    "product_name": "Canvas Tote Bag",
    "trend": "stable",
    "confidence": "low",
    "accuracy": 69.3,
    "predicted_demand": 210,
    "days_to_depletion": 48,
    "suggested_reorder_qty": 100,
    "generated_at": "2024-06-03T05:30:00Z"
  }
]"#;

const PURCHASE_ORDERS: &str = r#"[
  {
    "id": "018f5a02-0000-7000-8000-000000000001",
    "order_number": "PO-2024-0182",
    "supplier": "Northline Electronics",
    "status": "pending_approval",
    "priority": "urgent",
    "origin": "automatic",
    "total_amount": 5580.0,
    "line_count": 2,
    "created_at": "2024-06-03T06:00:00Z",
    "expected_date": null
  },
  {
    "id": "018f5a02-0000-7000-8000-000000000002",
    "order_number": "PO-2024-0179",
    "supplier": "Brightway Home Goods",
    "status": "approved",
    "priority": "high",
    "origin": "automatic",
    "total_amount": 1620.0,
    "line_count": 1,
    "created_at": "2024-06-02T09:20:00Z",
    "expected_date": "2024-06-10T00:00:00Z"
  },
  {
    "id": "018f5a02-0000-7000-8000-000000000003",
    "order_number": "PO-2024-0171",
    "supplier": "Atlas Textile Partners",
    "status": "in_transit",
    "priority": "normal",
    "origin": "manual",
    "total_amount": 925.0,
    "line_count": 3,
    "created_at": "2024-05-28T14:45:00Z",
    "expected_date": "2024-06-06T00:00:00Z"
  },
  {
    "id": "018f5a02-0000-7000-8000-000000000004",
    "order_number": "PO-2024-0165",
    "supplier": "Northline Electronics",
    "status": "delivered",
    "priority": "normal",
    "origin": "manual",
    "total_amount": 3104.5,
    "line_count": 4,
    "created_at": "2024-05-21T11:10:00Z",
    "expected_date": "2024-05-29T00:00:00Z"
  },
  {
    "id": "018f5a02-0000-7000-8000-000000000005",
    "order_number": "PO-2024-0158",
    "supplier": "Brightway Home Goods",
    "status": "cancelled",
    "priority": "low",
    "origin": "manual",
    "total_amount": 240.0,
    "line_count": 1,
    "created_at": "2024-05-15T16:30:00Z",
    "expected_date": null
  }
]"#;

const ALERTS: &str = r#"[
  {
    "id": "018f5a03-0000-7000-8000-000000000001",
    "title": "HOME-007 out of stock",
    "message": "Adjustable Desk Lamp hit zero units in the central warehouse.",
    "severity": "critical",
    "category": "stock",
    "status": "active",
    "raised_at": "2024-06-03T08:55:00Z"
  },
  {
    "id": "018f5a03-0000-7000-8000-000000000002",
    "title": "TECH-014 below reorder point",
    "message": "USB-C Travel Hub is projected to deplete within a week.",
    "severity": "warning",
    "category": "forecast",
    "status": "acknowledged",
    "raised_at": "2024-06-03T05:35:00Z"
  },
  {
    "id": "018f5a03-0000-7000-8000-000000000003",
    "title": "PO-2024-0182 awaiting approval",
    "message": "An automatic purchase order has been pending for 3 hours.",
    "severity": "warning",
    "category": "orders",
    "status": "active",
    "raised_at": "2024-06-03T09:00:00Z"
  },
  {
    "id": "018f5a03-0000-7000-8000-000000000004",
    "title": "Nightly import completed",
    "message": "Stock levels were synchronized from the warehouse feed.",
    "severity": "info",
    "category": "system",
    "status": "resolved",
    "raised_at": "2024-06-03T02:10:00Z"
  }
]"#;

const REPORTS: &str = r#"[
  {
    "id": "018f5a04-0000-7000-8000-000000000001",
    "code": "RPT-2024-031",
    "name": "Weekly stock valuation",
    "kind": "inventory",
    "format": "pdf",
    "status": "ready",
    "size_kb": 412.0,
    "generated_at": "2024-06-02T23:00:00Z"
  },
  {
    "id": "018f5a04-0000-7000-8000-000000000002",
    "code": "RPT-2024-032",
    "name": "Forecast accuracy digest",
    "kind": "forecasting",
    "format": "csv",
    "status": "ready",
    "size_kb": 88.5,
    "generated_at": "2024-06-03T04:00:00Z"
  },
  {
    "id": "018f5a04-0000-7000-8000-000000000003",
    "code": "RPT-2024-033",
    "name": "Supplier spend by month",
    "kind": "purchasing",
    "format": "xlsx",
    "status": "scheduled",
    "size_kb": 0.0,
    "generated_at": "2024-06-09T04:00:00Z"
  },
  {
    "id": "018f5a04-0000-7000-8000-000000000004",
    "code": "RPT-2024-034",
    "name": "Dead stock review",
    "kind": "performance",
    "format": "pdf",
    "status": "generating",
    "size_kb": 0.0,
    "generated_at": "2024-06-03T09:05:00Z"
  }
]"#;

const TEAM: &str = r#"[
  {
    "id": "018f5a05-0000-7000-8000-000000000001",
    "name": "Priya Raman",
    "email": "priya@acme-retail.example",
    "role": "admin",
    "status": "active",
    "last_active_at": "2024-06-03T09:12:00Z"
  },
  {
    "id": "018f5a05-0000-7000-8000-000000000002",
    "name": "Jonas Weber",
    "email": "jonas@acme-retail.example",
    "role": "manager",
    "status": "active",
    "last_active_at": "2024-06-02T17:48:00Z"
  },
  {
    "id": "018f5a05-0000-7000-8000-000000000003",
    "name": "Sol Alvarez",
    "email": "sol@acme-retail.example",
    "role": "analyst",
    "status": "active",
    "last_active_at": "2024-06-03T06:20:00Z"
  },
  {
    "id": "018f5a05-0000-7000-8000-000000000004",
    "name": "Mika Tanaka",
    "email": "mika@acme-retail.example",
    "role": "viewer",
    "status": "invited",
    "last_active_at": null
  }
]"#;

#[cfg(test)]
mod tests {
    use super::*;
    use stockcast_engine::Summarize;
    use stockcast_inventory::StockStatus;

    #[test]
    fn every_dataset_decodes() {
        assert_eq!(inventory_items().unwrap().len(), 6);
        assert_eq!(forecasts().unwrap().len(), 5);
        assert_eq!(purchase_orders().unwrap().len(), 5);
        assert_eq!(alerts().unwrap().len(), 4);
        assert_eq!(reports().unwrap().len(), 4);
        assert_eq!(team_members().unwrap().len(), 4);
    }

    #[test]
    fn seeded_inventory_has_one_out_of_stock_item() {
        let items = inventory_items().unwrap();
        let out: Vec<_> = items
            .iter()
            .filter(|item| item.status == StockStatus::OutOfStock)
            .collect();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].sku, "HOME-007");
        assert_eq!(out[0].current_stock, 0);

        let summary = stockcast_inventory::InventoryItem::summarize(&items);
        assert_eq!(summary.out_of_stock_count, 1);
    }

    #[test]
    fn seeded_forecasts_include_a_no_risk_product() {
        let records = forecasts().unwrap();
        assert!(records.iter().any(|f| f.days_to_depletion.is_none()));
    }
}
