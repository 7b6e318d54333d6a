//! Requires a WebDriver server (chromedriver, geckodriver or Selenium) and
//! an Appian site to sign in to:
//!
//!     chromedriver --port=4444
//!
//! Run as follows:
//!
//!     APP_URL=https://example.appiancloud.com/suite \
//!     APP_USERNAME=jdoe APP_PASSWORD=secret \
//!     cargo run --example login_flow
//!
//! WEBDRIVER_URL, BROWSER, HEADLESS and SELENIUM_WAIT_TIMEOUT are honoured
//! as well.

use appian_widgets::prelude::*;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let settings = Settings::from_env()?;
    let app_url = match &settings.app_url {
        Some(url) => url.clone(),
        None => {
            eprintln!("APP_URL is not set, nothing to do");
            return Ok(());
        }
    };
    let username = std::env::var("APP_USERNAME").unwrap_or_default();
    let password = std::env::var("APP_PASSWORD").unwrap_or_default();

    let driver = WebDriver::from_settings(&settings)?;
    driver.get(&app_url)?;

    let locator = driver.locator();

    // The sign-in page is a plain form, not Appian components.
    let form = locator.visible("//form[@id='loginForm']")?;
    form.find_element(By::Id("un"))?.send_keys(&username)?;
    form.find_element(By::Id("pw"))?.send_keys(&password)?;
    button::click_input_button_by_id(&locator, "jsDisabledSubmitButton")?;

    // Steps can also be data.
    let steps = [
        ("Tab", "Select", "Requests", None),
        ("Button", "Click", "New Request", None),
        ("Input Text", "Set Value", "Request Title", Some("New laptop")),
        ("Drop Down", "Select", "Priority", Some("High")),
        ("Date", "Set Value", "Needed By", Some("01/31/2025")),
        ("Button", "Click", "Submit", None),
    ];
    for (component, action, label, value) in steps.iter() {
        component_driver::execute(&locator, component, action, label, *value)?;
    }

    assert!(label::exists(&locator, "Request submitted", MatchPolicy::Partial)?);

    let table = table::find_table(&locator, "Request Title")?;
    println!("{} request(s) listed", table::row_count(&table)?);

    driver.quit()?;

    Ok(())
}
