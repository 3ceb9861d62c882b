//! Inspect command implementation

use crate::cli::{build_dashboard, InspectArgs};
use crate::controller::SEARCH_FAILED_PROMPT;
use crate::core::error::{Error, Result};
use crate::surface::events::SurfaceEvent;

/// Run the inspect command: search by id, then open the first row's detail
/// view and print what the formatter rendered
pub async fn run(args: InspectArgs) -> Result<()> {
    let mut controller = build_dashboard(args.url.as_deref())?;
    controller.form_mut().append("thing_id", &args.thing_id);

    let trigger = controller.trigger().id().clone();
    controller.handle_event(&SurfaceEvent::click(trigger)).await;

    if !controller.result_view().is_visible() {
        return Err(Error::Request {
            message: SEARCH_FAILED_PROMPT.to_string(),
        });
    }

    let button = match controller.result_view().table().rows().first() {
        Some(row) => row.show_button().clone(),
        None => {
            return Err(Error::NotFound {
                thing_id: args.thing_id,
            })
        }
    };
    controller.handle_event(&SurfaceEvent::click(button)).await;

    let host = controller.formatter().host();
    if args.markup {
        println!("{}", host.markup());
    } else {
        println!("{}", host.text());
    }

    Ok(())
}
