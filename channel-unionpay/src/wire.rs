// GZELINK wire schema, as deserialized from response XML

use rust_decimal::Decimal;
use serde::Deserialize;

/// Root document of a batch payout exchange (`<GZELINK>`)
#[derive(Debug, Deserialize)]
pub struct BatchTransactionDocument {
    #[serde(rename = "INFO")]
    pub info: Info,
    #[serde(rename = "BODY", default)]
    pub body: Option<Body>,
}

/// Protocol-level routing block (`<INFO>`)
#[derive(Debug, Default, Deserialize)]
pub struct Info {
    #[serde(rename = "TRX_CODE", default)]
    pub transaction_code: Option<String>,
    #[serde(rename = "VERSION", default)]
    pub version: Option<String>,
    #[serde(rename = "DATA_TYPE", default)]
    pub data_type: Option<String>,
    #[serde(rename = "REQ_SN", default)]
    pub request_serial_no: Option<String>,
    #[serde(rename = "RET_CODE", default)]
    pub return_code: Option<String>,
    #[serde(rename = "ERR_MSG", default)]
    pub error_msg: Option<String>,
    #[serde(rename = "SIGNED_MSG", default)]
    pub signed_msg: Option<String>,
}

/// Itemized block (`<BODY>`)
#[derive(Debug, Default, Deserialize)]
pub struct Body {
    #[serde(rename = "TRANS_SUM", default)]
    pub summary: Option<Summary>,
    #[serde(rename = "RET_DETAILS", default)]
    pub details: Details,
}

/// Control totals block (`<TRANS_SUM>`)
#[derive(Debug, Default, Deserialize)]
pub struct Summary {
    #[serde(rename = "BUSINESS_CODE", default)]
    pub business_code: Option<String>,
    #[serde(rename = "MERCHANT_ID", default)]
    pub merchant_id: Option<String>,
    #[serde(rename = "SUBMIT_TIME", default)]
    pub submit_time: Option<String>,
    #[serde(rename = "COUNT", default)]
    pub count: Option<u64>,
    #[serde(rename = "SUM", default, with = "rust_decimal::serde::str_option")]
    pub sum: Option<Decimal>,
}

/// Ordered list wrapper (`<RET_DETAILS>`)
#[derive(Debug, Default, Deserialize)]
pub struct Details {
    #[serde(rename = "RET_DETAIL", default)]
    pub items: Vec<Detail>,
}

/// One per-item outcome record (`<RET_DETAIL>`)
#[derive(Debug, Default, Deserialize)]
pub struct Detail {
    #[serde(rename = "SN", default)]
    pub serial_no: Option<String>,
    #[serde(rename = "RET_CODE", default)]
    pub return_code: Option<String>,
    #[serde(rename = "ERR_MSG", default)]
    pub error_msg: Option<String>,
    #[serde(rename = "ACCOUNT_NO", default)]
    pub bank_account_no: Option<String>,
    #[serde(rename = "ACCOUNT", default)]
    pub account_no: Option<String>,
    #[serde(rename = "ACCOUNT_NAME", default)]
    pub bank_account_name: Option<String>,
    #[serde(rename = "AMOUNT", default, with = "rust_decimal::serde::str_option")]
    pub amount: Option<Decimal>,
    #[serde(rename = "CUST_USERID", default)]
    pub user_id: Option<String>,
    #[serde(rename = "REMARK", default)]
    pub remark: Option<String>,
    #[serde(rename = "COMPLETE_TIME", default)]
    pub completed_time: Option<String>,
    #[serde(rename = "SETT_DATE", default)]
    pub settlement_date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_batch_response() {
        let content = r#"<?xml version="1.0" encoding="UTF-8"?><GZELINK><INFO><TRX_CODE>100001</TRX_CODE><VERSION>05</VERSION><REQ_SN>4f99a8e6-f58c-4ad3-920f-a52f10250dd4</REQ_SN><RET_CODE>0000</RET_CODE><ERR_MSG>接收成功</ERR_MSG><SIGNED_MSG>111c0dfe15f2</SIGNED_MSG></INFO><BODY><RET_DETAILS><RET_DETAIL><SN>20181026111439410</SN><RET_CODE>0000</RET_CODE><AMOUNT>1.00</AMOUNT></RET_DETAIL></RET_DETAILS></BODY></GZELINK>"#;

        let document: BatchTransactionDocument = quick_xml::de::from_str(content).unwrap();
        assert_eq!(document.info.transaction_code.as_deref(), Some("100001"));
        assert_eq!(document.info.return_code.as_deref(), Some("0000"));
        assert_eq!(
            document.info.request_serial_no.as_deref(),
            Some("4f99a8e6-f58c-4ad3-920f-a52f10250dd4")
        );

        let body = document.body.unwrap();
        assert_eq!(body.details.items.len(), 1);
        let detail = &body.details.items[0];
        assert_eq!(detail.serial_no.as_deref(), Some("20181026111439410"));
        assert_eq!(detail.return_code.as_deref(), Some("0000"));
        assert_eq!(detail.amount, Some(dec!(1.00)));
    }

    #[test]
    fn test_unknown_elements_are_ignored() {
        let content = "<GZELINK><INFO><RET_CODE>0000</RET_CODE><NEW_FIELD>x</NEW_FIELD></INFO><EXTRA/></GZELINK>";
        let document: BatchTransactionDocument = quick_xml::de::from_str(content).unwrap();
        assert_eq!(document.info.return_code.as_deref(), Some("0000"));
        assert!(document.body.is_none());
    }

    #[test]
    fn test_malformed_content_fails() {
        assert!(quick_xml::de::from_str::<BatchTransactionDocument>("<GZELINK><INFO>").is_err());
        assert!(quick_xml::de::from_str::<BatchTransactionDocument>("not xml at all").is_err());
    }
}
