//! Quick-start example for the Cappasity Rust SDK.
//!
//! Run with:
//!   CAPPASITY_API_TOKEN=eyJ... cargo run --example quickstart
//!
//! Or pass the token directly in code (not recommended for production).

use cappasity::{CappasityError, ClientBuilder, EmbedAttributes, Subject};

#[tokio::main]
async fn main() -> cappasity::Result<()> {
    // -----------------------------------------------------------------------
    // 1. Create a client (reads CAPPASITY_API_TOKEN from environment)
    // -----------------------------------------------------------------------
    let client = ClientBuilder::new().build()?;

    // Or provide the token directly:
    // let client = Client::new("eyJhbGciOi...")?;

    // -----------------------------------------------------------------------
    // 2. Request an embed code by marketplace URL
    // -----------------------------------------------------------------------
    let attrs = EmbedAttributes {
        width: Some(100),  // <= 100 is percent, larger is pixels
        height: Some(600), // 600px
        autorun: Some(true),
        autorotate: Some(true),
        closebutton: Some(false),
        logo: Some(false),
        analytics: Some(true),
        ..Default::default()
    };

    let subject =
        Subject::url("https://3d.cappasity.com/u/cappasity/2724daa5-cb68-43f9-8d5a-36be7e06f88d");
    let code = client.embed_code(&subject, &attrs).await?;

    // `id` is the immutable `username/model-id` identifier of the player;
    // `html` is the complete iframe snippet, ready to paste into a page.
    println!("Player: {}", code.id.as_deref().unwrap_or("<none>"));
    println!("{}", code.html);
    println!();

    // -----------------------------------------------------------------------
    // 3. Request an embed code by SKU/barcode
    // -----------------------------------------------------------------------
    let attrs = EmbedAttributes {
        width: Some(100),
        height: Some(600),
        autorun: Some(true),
        autorotate: Some(false),
        closebutton: Some(true),
        logo: Some(true),
        hidefullscreen: Some(false),
        enableimagezoom: Some(true),
        zoomquality: Some(1), // 1 = SD, 2 = HD
        autorotatetime: Some(12.0),
        autorotatedir: Some(1),
        ..Default::default()
    };

    match client.embed_for_sku("1239172819", &attrs).await {
        Ok(code) => println!("{}", code.html),
        // A 404 means there is no model associated with this SKU.
        Err(CappasityError::NotFound { message }) => {
            eprintln!("no model for that SKU: {message}")
        }
        Err(err) => return Err(err),
    }

    Ok(())
}
