//! Shared test utilities for execute and output tests.

use std::io::Write;

use tempfile::NamedTempFile;

/// Three hubs, two satellites and two links around `Invoice`.
pub const INVOICE_VAULT: &str = r#"{
    "hubs": [
        { "name": "Invoice", "business_keys": ["DocNo"] },
        { "name": "Employee", "business_keys": ["StaffNo"] },
        { "name": "Customer", "business_keys": ["CustomerNo", "Company"] }
    ],
    "satellites": [
        {
            "name": "InvoiceDetail",
            "hub_reference": { "hub_name": "Invoice" },
            "attributes": [
                { "name": "Amount", "data_type": "DECIMAL", "length": 12, "decimal_precision": 2 },
                { "name": "Remark", "data_type": "VARCHAR", "length": 200, "is_nullable": true }
            ]
        },
        {
            "name": "EmployeeProfile",
            "hub_reference": { "hub_name": "Employee" },
            "attributes": [
                { "name": "FullName", "data_type": "VARCHAR", "length": 100 }
            ]
        }
    ],
    "links": [
        {
            "name": "InvPreparedBy",
            "hub_references": [{ "hub_name": "Invoice" }, { "hub_name": "Employee" }]
        },
        {
            "name": "InvBilledTo",
            "hub_references": [{ "hub_name": "Invoice" }, { "hub_name": "Customer" }]
        }
    ]
}"#;

/// Create a temporary file containing the given content.
///
/// Used to hand definition files to commands.
pub fn create_temp_json_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp file");
    file
}

/// One invoice prepared by one employee, with a detail row.
pub const INVOICE_RECORDS: &str = r#"{
    "hubs": [
        {
            "hub_name": "Invoice",
            "hash_key": "9f1c0e6c0b8a4d2e8f3b7a6c5d4e3f21",
            "load_date": "2024-03-01T09:30:00",
            "record_source": "erp",
            "business_keys": [{ "key": "DocNo", "value": "INV-001" }]
        },
        {
            "hub_name": "Employee",
            "hash_key": "1a2b3c4d5e6f708192a3b4c5d6e7f809",
            "load_date": "2024-03-01T09:30:00",
            "record_source": "hr",
            "business_keys": [{ "key": "StaffNo", "value": "E-42" }]
        }
    ],
    "links": [
        {
            "link_name": "InvPreparedBy",
            "hash_key": "0123456789abcdef0123456789abcdef",
            "load_date": "2024-03-01T09:30:00",
            "record_source": "erp",
            "hub_hash_keys": [
                { "hub": { "hub_name": "Invoice" }, "hash_key": "9f1c0e6c0b8a4d2e8f3b7a6c5d4e3f21" },
                { "hub": { "hub_name": "Employee" }, "hash_key": "1a2b3c4d5e6f708192a3b4c5d6e7f809" }
            ]
        }
    ],
    "satellites": [
        {
            "satellite_name": "InvoiceDetail",
            "hub_name": "Invoice",
            "hub_hash_key": "9f1c0e6c0b8a4d2e8f3b7a6c5d4e3f21",
            "load_date": "2024-03-01T09:30:00",
            "record_source": "erp",
            "attributes": [
                {
                    "attribute": { "name": "Amount", "data_type": "DECIMAL", "length": 12, "decimal_precision": 2 },
                    "value": { "type": "DECIMAL", "value": 120.5 }
                },
                {
                    "attribute": { "name": "Remark", "data_type": "VARCHAR", "length": 200, "is_nullable": true },
                    "value": { "type": "NULL" }
                }
            ]
        }
    ]
}"#;
