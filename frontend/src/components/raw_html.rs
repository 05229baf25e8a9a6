use web_sys::Element;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct RawHtmlProps {
    pub html: AttrValue,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    /// Fired after the markup has been written into the host element.
    #[prop_or_default]
    pub on_rendered: Option<Callback<()>>,
}

/// Writes trusted markup (article bodies, the editor preview) into a host
/// element that Yew does not diff.
#[function_component(RawHtml)]
pub fn raw_html(props: &RawHtmlProps) -> Html {
    let host_ref = use_node_ref();

    {
        let host_ref = host_ref.clone();
        let on_rendered = props.on_rendered.clone();
        use_effect_with(props.html.clone(), move |next_html| {
            if let Some(host) = host_ref.cast::<Element>() {
                host.set_inner_html(next_html.as_str());
                if let Some(callback) = on_rendered {
                    callback.emit(());
                }
            }
            || ()
        });
    }

    html! {
        <div ref={host_ref} id={props.id.clone()} class={props.class.clone()} />
    }
}
