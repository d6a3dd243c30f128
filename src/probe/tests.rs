use super::*;
use crate::domain::{TcpAddress, TlsPolicy};
use crate::test_support::{closed_local_addr, run_async_test, spawn_http_responder};
use reqwest::Url;
use tokio::net::TcpListener;

fn parse_url(addr: std::net::SocketAddr) -> Result<Url, String> {
    Url::parse(&format!("http://{}/", addr)).map_err(|err| format!("bad url: {}", err))
}

fn tcp_address(addr: std::net::SocketAddr) -> Result<TcpAddress, String> {
    TcpAddress::parse(&addr.to_string()).map_err(|err| format!("bad address: {}", err))
}

#[test]
fn http_probe_succeeds_and_drains_body() -> Result<(), String> {
    run_async_test(async {
        let (addr, server) = spawn_http_responder().await?;
        let client = build_client(TlsPolicy::SkipVerification).map_err(|err| err.to_string())?;
        let probe = HttpProbe::new(client, parse_url(addr)?);

        let result = probe.probe().await;
        server.abort();
        if !result.succeeded {
            return Err("Expected HTTP probe to succeed".to_owned());
        }
        Ok(())
    })
}

#[test]
fn http_probe_reports_refused_connection() -> Result<(), String> {
    run_async_test(async {
        let addr = closed_local_addr().await?;
        let client = build_client(TlsPolicy::Verify).map_err(|err| err.to_string())?;
        let probe = HttpProbe::new(client, parse_url(addr)?);

        let result = probe.probe().await;
        if result.succeeded {
            return Err("Expected HTTP probe to fail".to_owned());
        }
        Ok(())
    })
}

#[test]
fn drain_counts_body_bytes() -> Result<(), String> {
    run_async_test(async {
        let (addr, server) = spawn_http_responder().await?;
        let client = build_client(TlsPolicy::SkipVerification).map_err(|err| err.to_string())?;
        let response = client
            .get(parse_url(addr)?)
            .send()
            .await
            .map_err(|err| format!("request failed: {}", err))?;
        let bytes = drain_response_body(response)
            .await
            .map_err(|err| format!("drain failed: {}", err))?;
        server.abort();
        if bytes != 2 {
            return Err(format!("Expected 2 body bytes, got {}", bytes));
        }
        Ok(())
    })
}

#[test]
fn tcp_probe_connects_and_closes() -> Result<(), String> {
    run_async_test(async {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .map_err(|err| format!("bind failed: {}", err))?;
        let addr = listener
            .local_addr()
            .map_err(|err| format!("addr failed: {}", err))?;
        let accept = tokio::spawn(async move { listener.accept().await.is_ok() });

        let result = TcpProbe::new(&tcp_address(addr)?).probe().await;
        let accepted = accept
            .await
            .map_err(|err| format!("accept task failed: {}", err))?;
        if !result.succeeded {
            return Err("Expected TCP probe to succeed".to_owned());
        }
        if !accepted {
            return Err("Expected listener to see the connection".to_owned());
        }
        Ok(())
    })
}

#[test]
fn tcp_probe_reports_unreachable_target() -> Result<(), String> {
    run_async_test(async {
        let addr = closed_local_addr().await?;
        let result = TcpProbe::new(&tcp_address(addr)?).probe().await;
        if result.succeeded {
            return Err("Expected TCP probe to fail".to_owned());
        }
        Ok(())
    })
}
